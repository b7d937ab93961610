use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::FacturaError;
use super::money::{
    checked_mul, checked_percent_of, checked_sub, round_money, sum_rounded, unbundle_vat,
};
use super::types::*;

/// Calculate subtotal, discount, net, VAT and total for one line.
///
/// The unit price is VAT-inclusive. When `discriminate_vat` is set the VAT
/// is unbundled (`net = total / (1 + rate/100)`) and shown separately;
/// otherwise it stays inside the net amount and `tax_amount` is zero.
///
/// Full precision is kept until the end. The rounded outputs satisfy
/// `line_total == subtotal - discount_amount` and, when discriminated,
/// `line_total == net_amount + tax_amount` exactly.
///
/// # Panics
///
/// Panics when the arithmetic overflows or `tax_rate` is -100. Inputs that
/// pass [`validate_line_input`](super::validate_line_input) never do; use
/// [`try_calculate_line_item`] for anything else.
pub fn calculate_line_item(input: &LineItemInput) -> LineItemResult {
    try_calculate_line_item(input).unwrap_or_else(|err| panic!("{err}"))
}

/// Fallible form of [`calculate_line_item`]: overflow and a zero VAT divisor
/// come back as [`FacturaError::Arithmetic`].
pub fn try_calculate_line_item(input: &LineItemInput) -> Result<LineItemResult, FacturaError> {
    let subtotal = checked_mul(input.quantity, input.unit_price)?;
    let discount = checked_percent_of(subtotal, input.discount_percent)?;
    let after_discount = checked_sub(subtotal, discount)?;
    let total_cost = input
        .unit_cost
        .map(|cost| checked_mul(input.quantity, cost).map(round_money))
        .transpose()?;

    let rounded_subtotal = round_money(subtotal);
    let line_total = round_money(after_discount);
    // Derived from the rounded pair so the printed figures always subtract cleanly
    let discount_amount = checked_sub(rounded_subtotal, line_total)?;

    if !input.discriminate_vat {
        return Ok(LineItemResult {
            subtotal: rounded_subtotal,
            discount_amount,
            net_amount: line_total,
            tax_amount: round_money(Decimal::ZERO),
            line_total,
            tax_rate: input.tax_rate,
            total_cost,
            display_net_price: None,
            display_tax_amount: None,
        });
    }

    let (net, _) = unbundle_vat(after_discount, input.tax_rate)?;
    let net_amount = round_money(net);
    let tax_amount = checked_sub(line_total, net_amount)?;
    let (unit_net, _) = unbundle_vat(input.unit_price, input.tax_rate)?;

    Ok(LineItemResult {
        subtotal: rounded_subtotal,
        discount_amount,
        net_amount,
        tax_amount,
        line_total,
        tax_rate: input.tax_rate,
        total_cost,
        display_net_price: Some(round_money(unit_net)),
        display_tax_amount: Some(tax_amount),
    })
}

/// Aggregate line results into document totals.
///
/// Each field is summed independently and rounded once.
pub fn calculate_document_totals(items: &[LineItemResult]) -> DocumentTotals {
    let mut by_rate: BTreeMap<Decimal, (Decimal, Decimal)> = BTreeMap::new();
    for item in items.iter().filter(|i| i.display_tax_amount.is_some()) {
        let entry = by_rate
            .entry(item.tax_rate)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += item.net_amount;
        entry.1 += item.tax_amount;
    }

    let vat_breakdown = by_rate
        .into_iter()
        .map(|(rate, (taxable, tax))| VatBreakdown {
            rate,
            taxable_amount: round_money(taxable),
            tax_amount: round_money(tax),
        })
        .collect();

    DocumentTotals {
        subtotal: sum_rounded(items.iter().map(|i| i.subtotal)),
        discount_amount: sum_rounded(items.iter().map(|i| i.discount_amount)),
        net_amount: sum_rounded(items.iter().map(|i| i.net_amount)),
        tax_amount: sum_rounded(items.iter().map(|i| i.tax_amount)),
        total_amount: sum_rounded(items.iter().map(|i| i.line_total)),
        vat_breakdown,
    }
}
