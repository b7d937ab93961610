use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Highest AFIP point-of-sale number.
pub const MAX_SALES_POINT: u32 = 99_999;

/// Largest absolute `quantity × unit price` (or unit cost) accepted on one line.
pub const MAX_LINE_AMOUNT: Decimal = dec!(1000000000000000);

/// Highest percentage a configured tax may carry.
pub const MAX_TAX_RATE: Decimal = dec!(1000);

/// Validate a line input before calculation.
/// Returns all validation errors found (not just the first).
pub fn validate_line_input(input: &LineItemInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_line_input_at(input, "line", &mut errors);
    errors
}

pub(crate) fn validate_line_input_at(
    input: &LineItemInput,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    // LI-01: quantity must be positive
    if input.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "LI-01",
            format!("{path}.quantity"),
            format!("quantity must be greater than zero, got {}", input.quantity),
        ));
    }

    // LI-02: unit price must not be negative
    if input.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            "LI-02",
            format!("{path}.unit_price"),
            format!("unit price must not be negative, got {}", input.unit_price),
        ));
    }

    // LI-03: discount within 0..=100 percent
    if input.discount_percent < Decimal::ZERO || input.discount_percent > dec!(100) {
        errors.push(ValidationError::new(
            "LI-03",
            format!("{path}.discount_percent"),
            format!(
                "discount must be between 0 and 100 percent, got {}",
                input.discount_percent
            ),
        ));
    }

    // LI-04: tax rate must not be negative
    if input.tax_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            "LI-04",
            format!("{path}.tax_rate"),
            format!("tax rate must not be negative, got {}", input.tax_rate),
        ));
    }

    // LI-05: unit cost must not be negative
    if let Some(cost) = input.unit_cost {
        if cost < Decimal::ZERO {
            errors.push(ValidationError::new(
                "LI-05",
                format!("{path}.unit_cost"),
                format!("unit cost must not be negative, got {cost}"),
            ));
        }
    }

    // LI-06: keep every product within range so calculation cannot overflow
    let amounts = [("unit_price", Some(input.unit_price)), ("unit_cost", input.unit_cost)];
    for (field, value) in amounts {
        let Some(value) = value else { continue };
        let within = input
            .quantity
            .checked_mul(value)
            .is_some_and(|amount| amount.abs() <= MAX_LINE_AMOUNT);
        if !within {
            errors.push(ValidationError::new(
                "LI-06",
                format!("{path}.{field}"),
                format!("quantity × {field} exceeds {MAX_LINE_AMOUNT}"),
            ));
        }
    }
}

/// Validate a configured tax before it is applied.
pub fn validate_tax_definition(tax: &TaxDefinition) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_tax_definition_at(tax, "tax", &mut errors);
    errors
}

pub(crate) fn validate_tax_definition_at(
    tax: &TaxDefinition,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    // TX-01: rate within 0..=MAX_TAX_RATE
    if tax.rate < Decimal::ZERO || tax.rate > MAX_TAX_RATE {
        errors.push(ValidationError::new(
            "TX-01",
            format!("{path}.rate"),
            format!(
                "tax '{}' rate must be between 0 and {MAX_TAX_RATE}, got {}",
                tax.id, tax.rate
            ),
        ));
    }
}

/// Validate an issuer profile loaded from tenant configuration.
pub fn validate_issuer_profile(profile: &IssuerProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.business_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "IS-01",
            "issuer.business_name",
            "business name must not be empty",
        ));
    }

    let digits = profile.cuit.chars().filter(|c| c.is_ascii_digit()).count();
    if digits != 11 {
        errors.push(ValidationError::new(
            "IS-02",
            "issuer.cuit",
            format!("CUIT must have 11 digits, got {digits}"),
        ));
    }

    if profile.sales_point == 0 || profile.sales_point > MAX_SALES_POINT {
        errors.push(ValidationError::new(
            "IS-03",
            "issuer.sales_point",
            format!(
                "sales point must be between 1 and {MAX_SALES_POINT}, got {}",
                profile.sales_point
            ),
        ));
    }

    // End consumers cannot issue vouchers
    if profile.vat_condition == VatCondition::ConsumidorFinal {
        errors.push(ValidationError::new(
            "IS-04",
            "issuer.vat_condition",
            "an issuer cannot be registered as CONSUMIDOR_FINAL",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> LineItemInput {
        LineItemInput {
            quantity: dec!(1),
            unit_price: dec!(10),
            discount_percent: dec!(0),
            tax_rate: dec!(21),
            discriminate_vat: true,
            unit_cost: Some(dec!(5)),
        }
    }

    fn valid_profile() -> IssuerProfile {
        IssuerProfile {
            cuit: "20-12345678-6".into(),
            business_name: "Almacén Don Juan".into(),
            vat_condition: VatCondition::ResponsableInscripto,
            sales_point: 1,
        }
    }

    #[test]
    fn valid_line_passes() {
        assert!(validate_line_input(&valid_input()).is_empty());
    }

    #[test]
    fn zero_price_is_valid() {
        let mut i = valid_input();
        i.unit_price = dec!(0);
        assert!(validate_line_input(&i).is_empty());
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut i = valid_input();
        i.quantity = dec!(0);
        let errors = validate_line_input(&i);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "LI-01");
        assert_eq!(errors[0].field, "line.quantity");
    }

    #[test]
    fn collects_all_errors() {
        let i = LineItemInput {
            quantity: dec!(-1),
            unit_price: dec!(-1),
            discount_percent: dec!(101),
            tax_rate: dec!(-21),
            discriminate_vat: false,
            unit_cost: Some(dec!(-3)),
        };
        let rules: Vec<_> = validate_line_input(&i)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert_eq!(rules, ["LI-01", "LI-02", "LI-03", "LI-04", "LI-05"]);
    }

    #[test]
    fn discount_bounds_inclusive() {
        let mut i = valid_input();
        i.discount_percent = dec!(100);
        assert!(validate_line_input(&i).is_empty());
        i.discount_percent = dec!(-0.01);
        assert_eq!(validate_line_input(&i).len(), 1);
    }

    #[test]
    fn oversized_line_rejected() {
        let mut i = valid_input();
        i.quantity = dec!(1e17);
        i.unit_price = dec!(1e15);
        i.unit_cost = None;
        let errors = validate_line_input(&i);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "LI-06");
        assert_eq!(errors[0].field, "line.unit_price");
    }

    #[test]
    fn line_amount_limit_inclusive() {
        let mut i = valid_input();
        i.quantity = dec!(1000);
        i.unit_price = MAX_LINE_AMOUNT / dec!(1000);
        i.unit_cost = Some(Decimal::MAX);
        let rules: Vec<_> = validate_line_input(&i)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert_eq!(rules, ["LI-06"]);
    }

    #[test]
    fn tax_rate_bounds() {
        let mut tax = TaxDefinition {
            id: "perc".into(),
            code: "PERC".into(),
            name: "Percepción".into(),
            rate: dec!(3.5),
            tax_type: TaxType::Perception,
            applies_to: [VatCondition::ResponsableInscripto].into_iter().collect(),
            calculation_base: "NETO".into(),
            display_in_invoice: true,
        };
        assert!(validate_tax_definition(&tax).is_empty());
        tax.rate = dec!(1e20);
        let errors = validate_tax_definition(&tax);
        assert_eq!(errors[0].rule, "TX-01");
        assert_eq!(errors[0].field, "tax.rate");
        tax.rate = dec!(-1);
        assert_eq!(validate_tax_definition(&tax).len(), 1);
    }

    #[test]
    fn valid_profile_passes() {
        assert!(validate_issuer_profile(&valid_profile()).is_empty());
    }

    #[test]
    fn profile_short_cuit() {
        let mut p = valid_profile();
        p.cuit = "20-1234-6".into();
        let errors = validate_issuer_profile(&p);
        assert_eq!(errors[0].rule, "IS-02");
    }

    #[test]
    fn profile_sales_point_range() {
        let mut p = valid_profile();
        p.sales_point = 0;
        assert_eq!(validate_issuer_profile(&p).len(), 1);
        p.sales_point = 100_000;
        assert_eq!(validate_issuer_profile(&p).len(), 1);
    }

    #[test]
    fn profile_consumer_issuer_rejected() {
        let mut p = valid_profile();
        p.vat_condition = VatCondition::ConsumidorFinal;
        let errors = validate_issuer_profile(&p);
        assert_eq!(errors[0].rule, "IS-04");
    }

    #[test]
    fn error_display_includes_rule() {
        let e = ValidationError::new("LI-01", "line.quantity", "must be positive");
        assert_eq!(e.to_string(), "[LI-01] line.quantity: must be positive");
        assert_eq!(e.rule, "LI-01");
    }
}
