//! Effective tax set for a line from product and counterparty assignments.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::money::{percent_of, round_money};
use crate::core::{TaxDefinition, TaxType, VatCondition};

/// A tax that applies to a line, with its computed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTax {
    pub id: String,
    pub code: String,
    pub name: String,
    pub tax_type: TaxType,
    pub rate: Decimal,
    /// `net × rate / 100`, rounded to 2 places.
    pub amount: Decimal,
    pub display_in_invoice: bool,
}

impl AppliedTax {
    fn from_definition(tax: &TaxDefinition, net_amount: Decimal) -> Self {
        Self {
            id: tax.id.clone(),
            code: tax.code.clone(),
            name: tax.name.clone(),
            tax_type: tax.tax_type,
            rate: tax.rate,
            amount: round_money(percent_of(net_amount, tax.rate)),
            display_in_invoice: tax.display_in_invoice,
        }
    }
}

/// Result of [`resolve_applicable_taxes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTaxes {
    /// The primary IVA tax, if any applies.
    pub iva: Option<AppliedTax>,
    /// Rate of the primary IVA tax; zero when none applies.
    pub iva_rate: Decimal,
    pub iva_amount: Decimal,
    /// Perceptions, internal and other taxes, in product order.
    pub other_taxes: Vec<AppliedTax>,
    /// IVA plus every other tax amount.
    pub total_tax_amount: Decimal,
}

/// Taxes that apply to a transaction before amounts are computed.
///
/// 1. With a counterparty that has at least one tax assigned, only taxes
///    assigned to both the product and the counterparty (by `id`) apply.
/// 2. Without a counterparty, or one with no taxes, every product tax applies.
/// 3. Taxes whose `applies_to` excludes the issuer's own condition are dropped.
///
/// Product order is preserved.
pub fn applicable_tax_set<'a>(
    product_taxes: &'a [TaxDefinition],
    entity_taxes: Option<&[TaxDefinition]>,
    issuer: VatCondition,
) -> Vec<&'a TaxDefinition> {
    let entity_ids: Option<HashSet<&str>> = entity_taxes
        .filter(|taxes| !taxes.is_empty())
        .map(|taxes| taxes.iter().map(|t| t.id.as_str()).collect());

    product_taxes
        .iter()
        .filter(|t| {
            entity_ids
                .as_ref()
                .is_none_or(|ids| ids.contains(t.id.as_str()))
        })
        .filter(|t| t.applies_to.contains(&issuer))
        .collect()
}

/// The IVA tax with the highest rate among `taxes`; earliest wins on a tie.
/// Non-IVA taxes are ignored.
pub fn primary_iva<'a>(taxes: &[&'a TaxDefinition]) -> Option<&'a TaxDefinition> {
    let mut primary: Option<&TaxDefinition> = None;
    for &candidate in taxes.iter().filter(|t| t.tax_type == TaxType::Iva) {
        if primary.is_none_or(|p| candidate.rate > p.rate) {
            primary = Some(candidate);
        }
    }
    primary
}

/// Resolve the effective taxes of a line and compute their amounts against
/// `net_amount`.
///
/// Every tax is computed on the net base, never on an amount that already
/// includes another tax. If more than one IVA tax survives filtering, the
/// highest rate is used and the rest are ignored (earliest wins on a tie);
/// the anomaly is logged at `warn`.
pub fn resolve_applicable_taxes(
    product_taxes: &[TaxDefinition],
    entity_taxes: Option<&[TaxDefinition]>,
    issuer: VatCondition,
    net_amount: Decimal,
) -> ResolvedTaxes {
    let applicable = applicable_tax_set(product_taxes, entity_taxes, issuer);

    let (iva_candidates, others): (Vec<&TaxDefinition>, Vec<&TaxDefinition>) = applicable
        .into_iter()
        .partition(|t| t.tax_type == TaxType::Iva);

    let primary = primary_iva(&iva_candidates);

    if iva_candidates.len() > 1 {
        if let Some(p) = primary {
            let ignored: Vec<&str> = iva_candidates
                .iter()
                .filter(|t| t.id != p.id)
                .map(|t| t.id.as_str())
                .collect();
            warn!(
                selected = %p.id,
                rate = %p.rate,
                ?ignored,
                "multiple IVA taxes apply to one line; using the highest rate"
            );
        }
    }

    let iva = primary.map(|t| AppliedTax::from_definition(t, net_amount));
    let other_taxes: Vec<AppliedTax> = others
        .into_iter()
        .map(|t| AppliedTax::from_definition(t, net_amount))
        .collect();

    let iva_rate = iva.as_ref().map_or(Decimal::ZERO, |t| t.rate);
    let iva_amount = iva
        .as_ref()
        .map_or_else(|| round_money(Decimal::ZERO), |t| t.amount);
    let total_tax_amount = iva_amount + other_taxes.iter().map(|t| t.amount).sum::<Decimal>();

    ResolvedTaxes {
        iva,
        iva_rate,
        iva_amount,
        other_taxes,
        total_tax_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaxDefinitionBuilder;
    use rust_decimal_macros::dec;

    fn iva(id: &str, rate: Decimal) -> TaxDefinition {
        TaxDefinitionBuilder::new(id, format!("IVA{rate}"), TaxType::Iva, rate).build()
    }

    fn perception(id: &str, rate: Decimal) -> TaxDefinition {
        TaxDefinitionBuilder::new(id, "PERC_IIBB", TaxType::Perception, rate)
            .applies_to(&[VatCondition::ResponsableInscripto])
            .build()
    }

    #[test]
    fn product_only_when_no_entity() {
        let product = vec![iva("iva21", dec!(21)), perception("iibb", dec!(3))];
        let r = resolve_applicable_taxes(
            &product,
            None,
            VatCondition::ResponsableInscripto,
            dec!(100),
        );
        assert_eq!(r.iva_rate, dec!(21));
        assert_eq!(r.iva_amount, dec!(21.00));
        assert_eq!(r.other_taxes.len(), 1);
        assert_eq!(r.other_taxes[0].amount, dec!(3.00));
        assert_eq!(r.total_tax_amount, dec!(24.00));
    }

    #[test]
    fn intersection_with_entity() {
        let product = vec![iva("iva21", dec!(21)), perception("iibb", dec!(3))];
        let entity = vec![iva("iva21", dec!(21))];
        let r = resolve_applicable_taxes(
            &product,
            Some(entity.as_slice()),
            VatCondition::ResponsableInscripto,
            dec!(100),
        );
        assert_eq!(r.iva_rate, dec!(21));
        assert!(r.other_taxes.is_empty());
        assert_eq!(r.total_tax_amount, dec!(21.00));
    }

    #[test]
    fn empty_entity_falls_back_to_product() {
        let product = vec![iva("iva21", dec!(21)), perception("iibb", dec!(3))];
        let with_empty = resolve_applicable_taxes(
            &product,
            Some(&[][..]),
            VatCondition::ResponsableInscripto,
            dec!(250),
        );
        let with_none = resolve_applicable_taxes(
            &product,
            None,
            VatCondition::ResponsableInscripto,
            dec!(250),
        );
        assert_eq!(with_empty, with_none);
    }

    #[test]
    fn issuer_condition_filters() {
        let product = vec![iva("iva21", dec!(21)), perception("iibb", dec!(3))];
        let r = resolve_applicable_taxes(&product, None, VatCondition::Monotributo, dec!(100));
        // Perception only applies to RI issuers
        assert!(r.other_taxes.is_empty());
        assert_eq!(r.iva_rate, dec!(21));
    }

    #[test]
    fn highest_iva_wins() {
        let product = vec![
            iva("iva105", dec!(10.5)),
            iva("iva27", dec!(27)),
            iva("iva21", dec!(21)),
        ];
        let r = resolve_applicable_taxes(
            &product,
            None,
            VatCondition::ResponsableInscripto,
            dec!(100),
        );
        assert_eq!(r.iva.as_ref().unwrap().id, "iva27");
        assert_eq!(r.iva_amount, dec!(27.00));
        assert_eq!(r.total_tax_amount, dec!(27.00));
    }

    #[test]
    fn equal_rates_keep_first() {
        let product = vec![iva("a", dec!(21)), iva("b", dec!(21))];
        let r = resolve_applicable_taxes(
            &product,
            None,
            VatCondition::ResponsableInscripto,
            dec!(10),
        );
        assert_eq!(r.iva.unwrap().id, "a");
    }

    #[test]
    fn no_taxes_is_zero() {
        let r = resolve_applicable_taxes(&[], None, VatCondition::Exento, dec!(100));
        assert!(r.iva.is_none());
        assert_eq!(r.iva_rate, dec!(0));
        assert_eq!(r.iva_amount, dec!(0));
        assert_eq!(r.total_tax_amount, dec!(0));
    }

    #[test]
    fn disjoint_entity_yields_nothing() {
        let product = vec![iva("iva21", dec!(21))];
        let entity = vec![perception("iibb", dec!(3))];
        let r = resolve_applicable_taxes(
            &product,
            Some(entity.as_slice()),
            VatCondition::ResponsableInscripto,
            dec!(100),
        );
        assert!(r.iva.is_none());
        assert!(r.other_taxes.is_empty());
    }

    #[test]
    fn no_tax_on_tax() {
        let internal = TaxDefinitionBuilder::new("int", "INT", TaxType::Internal, dec!(8)).build();
        let product = vec![iva("iva21", dec!(21)), internal];
        let r = resolve_applicable_taxes(
            &product,
            None,
            VatCondition::ResponsableInscripto,
            dec!(1000),
        );
        assert_eq!(r.iva_amount, dec!(210.00));
        assert_eq!(r.other_taxes[0].amount, dec!(80.00));
        assert_eq!(r.total_tax_amount, dec!(290.00));
    }
}
