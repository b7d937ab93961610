use rust_decimal::Decimal;

use super::error::{FacturaError, validation_failure};
use super::types::*;
use super::validation;

/// Builder for [`LineItemInput`].
///
/// ```
/// use factura::core::*;
/// use rust_decimal_macros::dec;
///
/// let item = LineItemBuilder::new(dec!(3), dec!(1210))
///     .tax_rate(dec!(21))
///     .discriminate_vat(true)
///     .unit_cost(dec!(700))
///     .build()
///     .unwrap();
/// assert_eq!(calculate_line_item(&item).net_amount, dec!(3000.00));
/// ```
pub struct LineItemBuilder {
    quantity: Decimal,
    unit_price: Decimal,
    discount_percent: Decimal,
    tax_rate: Decimal,
    discriminate_vat: bool,
    unit_cost: Option<Decimal>,
}

impl LineItemBuilder {
    /// Start a line with the standard 21% rate, no discount, VAT bundled.
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            discount_percent: Decimal::ZERO,
            tax_rate: Decimal::new(21, 0),
            discriminate_vat: false,
            unit_cost: None,
        }
    }

    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn discriminate_vat(mut self, discriminate: bool) -> Self {
        self.discriminate_vat = discriminate;
        self
    }

    pub fn unit_cost(mut self, cost: Decimal) -> Self {
        self.unit_cost = Some(cost);
        self
    }

    /// Build the input, running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<LineItemInput, FacturaError> {
        let input = self.build_unchecked();
        let errors = validation::validate_line_input(&input);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }
        Ok(input)
    }

    /// Build without validation, for importing already-checked data.
    pub fn build_unchecked(self) -> LineItemInput {
        LineItemInput {
            quantity: self.quantity,
            unit_price: self.unit_price,
            discount_percent: self.discount_percent,
            tax_rate: self.tax_rate,
            discriminate_vat: self.discriminate_vat,
            unit_cost: self.unit_cost,
        }
    }
}

/// Builder for [`TaxDefinition`].
pub struct TaxDefinitionBuilder {
    id: String,
    code: String,
    name: String,
    rate: Decimal,
    tax_type: TaxType,
    applies_to: std::collections::BTreeSet<VatCondition>,
    calculation_base: String,
    display_in_invoice: bool,
}

impl TaxDefinitionBuilder {
    /// Start a tax that applies to every issuer category and is printed.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        tax_type: TaxType,
        rate: Decimal,
    ) -> Self {
        let code = code.into();
        Self {
            id: id.into(),
            name: code.clone(),
            code,
            rate,
            tax_type,
            applies_to: [
                VatCondition::ResponsableInscripto,
                VatCondition::Monotributo,
                VatCondition::Exento,
            ]
            .into_iter()
            .collect(),
            calculation_base: "NETO".to_string(),
            display_in_invoice: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restrict the issuer categories the tax applies to.
    pub fn applies_to(mut self, conditions: &[VatCondition]) -> Self {
        self.applies_to = conditions.iter().copied().collect();
        self
    }

    pub fn calculation_base(mut self, base: impl Into<String>) -> Self {
        self.calculation_base = base.into();
        self
    }

    pub fn display_in_invoice(mut self, display: bool) -> Self {
        self.display_in_invoice = display;
        self
    }

    pub fn build(self) -> TaxDefinition {
        TaxDefinition {
            id: self.id,
            code: self.code,
            name: self.name,
            rate: self.rate,
            tax_type: self.tax_type,
            applies_to: self.applies_to,
            calculation_base: self.calculation_base,
            display_in_invoice: self.display_in_invoice,
        }
    }
}

/// Builder for [`IssuerProfile`].
pub struct IssuerProfileBuilder {
    cuit: String,
    business_name: String,
    vat_condition: VatCondition,
    sales_point: u32,
}

impl IssuerProfileBuilder {
    pub fn new(
        cuit: impl Into<String>,
        business_name: impl Into<String>,
        vat_condition: VatCondition,
    ) -> Self {
        Self {
            cuit: cuit.into(),
            business_name: business_name.into(),
            vat_condition,
            sales_point: 1,
        }
    }

    pub fn sales_point(mut self, sales_point: u32) -> Self {
        self.sales_point = sales_point;
        self
    }

    /// Build the profile, running validation.
    pub fn build(self) -> Result<IssuerProfile, FacturaError> {
        let profile = IssuerProfile {
            cuit: self.cuit,
            business_name: self.business_name,
            vat_condition: self.vat_condition,
            sales_point: self.sales_point,
        };
        let errors = validation::validate_issuer_profile(&profile);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }
        Ok(profile)
    }
}
