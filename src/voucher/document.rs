use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::determine_voucher_type_for;
use super::types::{DocumentKind, VoucherType};
use crate::core::money::{round_money, unbundle_vat};
use crate::core::{
    DocumentTotals, FacturaError, IssuerProfile, LineItemInput, LineItemResult, TaxDefinition,
    VatCondition, calculate_document_totals, try_calculate_line_item, validate_issuer_profile,
    validate_line_input_at, validate_tax_definition_at, validation_failure,
};
use crate::tax::{ResolvedTaxes, applicable_tax_set, primary_iva, resolve_applicable_taxes};

/// Largest number of lines accepted on one document.
pub const MAX_DOCUMENT_LINES: usize = 10_000;

/// One product line of a sale, before tax resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub quantity: Decimal,
    /// VAT-inclusive unit price.
    pub unit_price: Decimal,
    pub discount_percent: Decimal,
    pub unit_cost: Option<Decimal>,
    /// Taxes assigned to the product.
    pub product_taxes: Vec<TaxDefinition>,
}

impl SaleLine {
    pub fn new(quantity: Decimal, unit_price: Decimal, product_taxes: Vec<TaxDefinition>) -> Self {
        Self {
            quantity,
            unit_price,
            discount_percent: Decimal::ZERO,
            unit_cost: None,
            product_taxes,
        }
    }

    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    pub fn unit_cost(mut self, cost: Decimal) -> Self {
        self.unit_cost = Some(cost);
        self
    }
}

/// A calculated line of a [`SaleDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDocumentLine {
    pub input: LineItemInput,
    pub result: LineItemResult,
    /// Effective taxes, computed on the line's VAT-exclusive base.
    pub taxes: ResolvedTaxes,
}

/// A fully calculated sale document.
///
/// `grand_total` is the amount the voucher is authorized and printed for
/// (`ImpTotal` in the AFIP request, `importe` in the fiscal QR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDocument {
    pub voucher_type: VoucherType,
    pub discriminate_vat: bool,
    /// The voucher type came from the table's default row.
    pub from_default: bool,
    pub lines: Vec<SaleDocumentLine>,
    pub totals: DocumentTotals,
    /// Sum of perceptions and other non-IVA taxes across lines.
    /// Not included in `totals`.
    pub other_taxes_amount: Decimal,
    /// `totals.total_amount + other_taxes_amount`.
    pub grand_total: Decimal,
}

/// Builds a [`SaleDocument`]: picks the voucher type, resolves each line's
/// taxes, calculates lines and aggregates totals.
///
/// ```
/// use factura::core::*;
/// use factura::voucher::*;
/// use rust_decimal_macros::dec;
///
/// let issuer = IssuerProfileBuilder::new(
///     "20-12345678-6",
///     "ACME SRL",
///     VatCondition::ResponsableInscripto,
/// )
/// .build()
/// .unwrap();
/// let iva21 = TaxDefinitionBuilder::new("1", "IVA21", TaxType::Iva, dec!(21)).build();
///
/// let doc = SaleDocumentBuilder::new(issuer, DocumentKind::Invoice)
///     .customer(VatCondition::ResponsableInscripto)
///     .add_line(SaleLine::new(dec!(2), dec!(100), vec![iva21]).discount(dec!(10)))
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.voucher_type, VoucherType::FcA);
/// assert_eq!(doc.totals.net_amount, dec!(148.76));
/// assert_eq!(doc.totals.total_amount, dec!(180.00));
/// ```
pub struct SaleDocumentBuilder {
    issuer: IssuerProfile,
    kind: DocumentKind,
    customer: Option<VatCondition>,
    customer_taxes: Option<Vec<TaxDefinition>>,
    lines: Vec<SaleLine>,
}

impl SaleDocumentBuilder {
    pub fn new(issuer: IssuerProfile, kind: DocumentKind) -> Self {
        Self {
            issuer,
            kind,
            customer: None,
            customer_taxes: None,
            lines: Vec::new(),
        }
    }

    /// VAT condition of an identified customer. Without one the sale is to an
    /// anonymous buyer.
    pub fn customer(mut self, condition: VatCondition) -> Self {
        self.customer = Some(condition);
        self
    }

    /// Taxes assigned to the customer; intersected with each product's taxes.
    pub fn customer_taxes(mut self, taxes: Vec<TaxDefinition>) -> Self {
        self.customer_taxes = Some(taxes);
        self
    }

    pub fn add_line(mut self, line: SaleLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Calculate the document. Returns all validation errors (not just the first).
    pub fn build(self) -> Result<SaleDocument, FacturaError> {
        if self.lines.is_empty() {
            return Err(FacturaError::Builder(
                "at least one line is required".into(),
            ));
        }
        if self.lines.len() > MAX_DOCUMENT_LINES {
            return Err(FacturaError::Builder(format!(
                "a document cannot have more than {MAX_DOCUMENT_LINES} lines"
            )));
        }

        let mut errors = validate_issuer_profile(&self.issuer);

        let issuer_condition = self.issuer.vat_condition;
        let determination =
            determine_voucher_type_for(self.kind, issuer_condition, self.customer);
        let customer_taxes = self.customer_taxes.as_deref();
        for (j, tax) in customer_taxes.unwrap_or_default().iter().enumerate() {
            validate_tax_definition_at(tax, &format!("customer_taxes.{j}"), &mut errors);
        }

        let mut pending = Vec::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            for (j, tax) in line.product_taxes.iter().enumerate() {
                let tax_path = format!("lines.{i}.product_taxes.{j}");
                validate_tax_definition_at(tax, &tax_path, &mut errors);
            }
            let applicable =
                applicable_tax_set(&line.product_taxes, customer_taxes, issuer_condition);
            let tax_rate = primary_iva(&applicable).map_or(Decimal::ZERO, |t| t.rate);

            let input = LineItemInput {
                quantity: line.quantity,
                unit_price: line.unit_price,
                discount_percent: line.discount_percent,
                tax_rate,
                discriminate_vat: determination.discriminate_vat,
                unit_cost: line.unit_cost,
            };
            validate_line_input_at(&input, &format!("lines.{i}"), &mut errors);
            pending.push((input, line));
        }

        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }

        let mut lines = Vec::with_capacity(pending.len());
        for (input, line) in pending {
            let result = try_calculate_line_item(&input)?;
            let net_base = if input.discriminate_vat {
                result.net_amount
            } else {
                round_money(unbundle_vat(result.line_total, input.tax_rate)?.0)
            };
            let taxes = resolve_applicable_taxes(
                &line.product_taxes,
                customer_taxes,
                issuer_condition,
                net_base,
            );
            lines.push(SaleDocumentLine {
                input,
                result,
                taxes,
            });
        }

        let results: Vec<LineItemResult> = lines.iter().map(|l| l.result.clone()).collect();
        let totals = calculate_document_totals(&results);
        let other_taxes_amount = round_money(
            lines
                .iter()
                .flat_map(|l| l.taxes.other_taxes.iter())
                .map(|t| t.amount)
                .sum(),
        );

        let grand_total = totals.total_amount + other_taxes_amount;

        debug!(
            voucher_type = %determination.voucher_type,
            lines = lines.len(),
            total = %grand_total,
            "calculated sale document"
        );

        Ok(SaleDocument {
            voucher_type: determination.voucher_type,
            discriminate_vat: determination.discriminate_vat,
            from_default: determination.from_default,
            lines,
            totals,
            other_taxes_amount,
            grand_total,
        })
    }
}
