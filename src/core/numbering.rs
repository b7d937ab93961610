use super::error::FacturaError;
use super::validation::MAX_SALES_POINT;

/// Highest voucher number AFIP accepts within one sales point and voucher type.
pub const MAX_VOUCHER_NUMBER: u64 = 99_999_999;

/// Format a voucher number as printed: `PPPPP-NNNNNNNN`.
///
/// ```
/// assert_eq!(factura::core::format_voucher_number(1, 123), "00001-00000123");
/// ```
pub fn format_voucher_number(sales_point: u32, number: u64) -> String {
    format!("{sales_point:05}-{number:08}")
}

/// Gapless voucher number sequence for one sales point and voucher type.
///
/// AFIP numbers each (punto de venta, tipo de comprobante) pair
/// independently, starting at 1, with no gaps allowed.
#[derive(Debug, Clone)]
pub struct VoucherNumberSequence {
    sales_point: u32,
    next_number: u64,
}

impl VoucherNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(sales_point: u32) -> Result<Self, FacturaError> {
        Self::starting_at(sales_point, 1)
    }

    /// Create a sequence continuing from a given number (e.g. the last
    /// authorized number reported by AFIP plus one).
    pub fn starting_at(sales_point: u32, next_number: u64) -> Result<Self, FacturaError> {
        if sales_point == 0 || sales_point > MAX_SALES_POINT {
            return Err(FacturaError::Numbering(format!(
                "sales point {sales_point} out of range 1..={MAX_SALES_POINT}"
            )));
        }
        if next_number == 0 {
            return Err(FacturaError::Numbering(
                "voucher numbers start at 1".into(),
            ));
        }
        Ok(Self {
            sales_point,
            next_number,
        })
    }

    /// Issue the next number, formatted.
    pub fn next_number(&mut self) -> Result<String, FacturaError> {
        let num = self.next_number;
        if num > MAX_VOUCHER_NUMBER {
            return Err(FacturaError::Numbering(format!(
                "sales point {} exhausted its {MAX_VOUCHER_NUMBER} voucher numbers",
                self.sales_point
            )));
        }
        self.next_number += 1;
        Ok(format_voucher_number(self.sales_point, num))
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format_voucher_number(self.sales_point, self.next_number)
    }

    pub fn sales_point(&self) -> u32 {
        self.sales_point
    }

    /// Get the next number that will be issued (without formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }
}
