use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VAT registration category of a party with AFIP (condición frente al IVA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VatCondition {
    /// RI: registered VAT taxpayer.
    ResponsableInscripto,
    /// MT: simplified small-taxpayer regime.
    Monotributo,
    /// CF: end consumer (only ever a customer).
    ConsumidorFinal,
    /// EX: VAT exempt.
    Exento,
}

impl VatCondition {
    /// All conditions, in declaration order.
    pub const ALL: [VatCondition; 4] = [
        Self::ResponsableInscripto,
        Self::Monotributo,
        Self::ConsumidorFinal,
        Self::Exento,
    ];

    /// Two-letter short code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ResponsableInscripto => "RI",
            Self::Monotributo => "MT",
            Self::ConsumidorFinal => "CF",
            Self::Exento => "EX",
        }
    }

    /// Long code as persisted (e.g. "RESPONSABLE_INSCRIPTO").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResponsableInscripto => "RESPONSABLE_INSCRIPTO",
            Self::Monotributo => "MONOTRIBUTO",
            Self::ConsumidorFinal => "CONSUMIDOR_FINAL",
            Self::Exento => "EXENTO",
        }
    }

    /// Parse either the short or the long code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "RI" | "RESPONSABLE_INSCRIPTO" => Some(Self::ResponsableInscripto),
            "MT" | "MONOTRIBUTO" => Some(Self::Monotributo),
            "CF" | "CONSUMIDOR_FINAL" => Some(Self::ConsumidorFinal),
            "EX" | "EXENTO" => Some(Self::Exento),
            _ => None,
        }
    }
}

impl std::fmt::Display for VatCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of tax a [`TaxDefinition`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxType {
    /// IVA: value added tax.
    Iva,
    /// Percepción: withholding collected on behalf of a tax agency.
    Perception,
    /// Impuestos internos: excise taxes.
    Internal,
    /// Anything else configured by the tenant.
    Other,
}

/// A tax configured by the tenant and assigned to products and/or counterparties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDefinition {
    /// Stable identity used for product/counterparty intersection.
    pub id: String,
    /// Short code (e.g. "IVA21", "PERC_IIBB").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Rate as a percentage (21 = 21%).
    pub rate: Decimal,
    pub tax_type: TaxType,
    /// Issuer VAT categories this tax can apply to.
    pub applies_to: BTreeSet<VatCondition>,
    /// Free-text description of the taxable base (e.g. "NETO").
    pub calculation_base: String,
    /// Whether the tax is printed as its own line on the voucher.
    pub display_in_invoice: bool,
}

/// Input for one sale/purchase line calculation.
///
/// Values are assumed validated (see [`validate_line_input`](super::validate_line_input)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Quantity, > 0.
    pub quantity: Decimal,
    /// Unit price, VAT-inclusive, ≥ 0.
    pub unit_price: Decimal,
    /// Discount percentage in [0, 100].
    pub discount_percent: Decimal,
    /// VAT rate percentage, ≥ 0.
    pub tax_rate: Decimal,
    /// Unbundle VAT from the price and show it separately (Factura A).
    pub discriminate_vat: bool,
    /// Unit cost for margin reporting, ≥ 0.
    pub unit_cost: Option<Decimal>,
}

/// Calculated amounts for one line, all rounded to 2 places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemResult {
    /// quantity × unit price.
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    /// Amount without VAT (equals the line total when VAT is not discriminated).
    pub net_amount: Decimal,
    /// Discriminated VAT; zero when VAT stays bundled.
    pub tax_amount: Decimal,
    /// subtotal − discount.
    pub line_total: Decimal,
    /// VAT rate the line was calculated with.
    pub tax_rate: Decimal,
    /// quantity × unit cost.
    pub total_cost: Option<Decimal>,
    /// Per-unit price without VAT, for Factura A presentation.
    pub display_net_price: Option<Decimal>,
    /// VAT amount as printed on the voucher.
    pub display_tax_amount: Option<Decimal>,
}

/// Discriminated VAT grouped by rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// VAT rate percentage.
    pub rate: Decimal,
    /// Sum of net amounts taxed at this rate.
    pub taxable_amount: Decimal,
    /// Sum of VAT at this rate.
    pub tax_amount: Decimal,
}

/// Document totals aggregated from line results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub net_amount: Decimal,
    pub tax_amount: Decimal,
    /// Sum of line totals.
    pub total_amount: Decimal,
    /// VAT per rate; only discriminated lines contribute.
    pub vat_breakdown: Vec<VatBreakdown>,
}

/// Issuing business as configured for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerProfile {
    /// CUIT, with or without separators.
    pub cuit: String,
    /// Razón social.
    pub business_name: String,
    pub vat_condition: VatCondition,
    /// AFIP point of sale (punto de venta), 1..=99999.
    pub sales_point: u32,
}
