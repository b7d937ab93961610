//! Decimal money helpers.
//!
//! Intermediate values keep full `Decimal` precision; rounding happens only
//! at output boundaries via [`round_money`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::FacturaError;

/// Number of decimal places for all returned monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a monetary amount to [`MONEY_SCALE`] places.
///
/// The result always carries exactly two fractional digits, so `dec!(50)`
/// becomes `50.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = round_dp(value, MONEY_SCALE);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// `base * percent / 100`, unrounded.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    base * percent / dec!(100)
}

/// Divisor that strips VAT from a VAT-inclusive amount: `1 + rate / 100`.
///
/// For any rate ≥ 0 the divisor is ≥ 1.
pub fn vat_divisor(rate: Decimal) -> Decimal {
    Decimal::ONE + rate / dec!(100)
}

/// Division that reports zero divisors and overflow instead of panicking.
pub fn checked_div(dividend: Decimal, divisor: Decimal) -> Result<Decimal, FacturaError> {
    dividend.checked_div(divisor).ok_or_else(|| {
        FacturaError::Arithmetic(format!("cannot divide {dividend} by {divisor}"))
    })
}

/// Multiplication that reports overflow instead of panicking.
pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> Result<Decimal, FacturaError> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| FacturaError::Arithmetic(format!("{lhs} × {rhs} overflows")))
}

/// Subtraction that reports overflow instead of panicking.
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> Result<Decimal, FacturaError> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| FacturaError::Arithmetic(format!("{lhs} - {rhs} overflows")))
}

/// `base * percent / 100`, unrounded, reporting overflow.
pub fn checked_percent_of(base: Decimal, percent: Decimal) -> Result<Decimal, FacturaError> {
    checked_div(checked_mul(base, percent)?, dec!(100))
}

/// Split a VAT-inclusive amount into its (net, tax) parts, unrounded.
///
/// `net + tax == gross` holds exactly.
pub fn unbundle_vat(gross: Decimal, rate: Decimal) -> Result<(Decimal, Decimal), FacturaError> {
    let net = checked_div(gross, vat_divisor(rate))?;
    Ok((net, gross - net))
}

/// Sum full-precision values and round once at the end.
pub fn sum_rounded<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_money(values.into_iter().sum())
}

/// Convert an amount to integer minor units (cents): `amount * 100`,
/// rounded half-up to the nearest integer.
pub fn to_minor_units(amount: Decimal) -> Result<i64, FacturaError> {
    amount
        .checked_mul(dec!(100))
        .map(|cents| round_dp(cents, 0))
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| FacturaError::Arithmetic(format!("amount {amount} out of range")))
}
