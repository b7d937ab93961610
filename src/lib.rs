//! # factura
//!
//! Fiscal document engine for Argentine small-business invoicing:
//! line-item VAT calculation, tax applicability, AFIP voucher-type
//! determination, and the printed fiscal QR code.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Every calculation is a pure function; persistence, the AFIP web services
//! and printing are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use factura::core::*;
//! use rust_decimal_macros::dec;
//!
//! let item = LineItemBuilder::new(dec!(2), dec!(100))
//!     .discount(dec!(10))
//!     .tax_rate(dec!(21))
//!     .discriminate_vat(true)
//!     .build()
//!     .unwrap();
//!
//! let result = calculate_line_item(&item);
//! assert_eq!(result.net_amount, dec!(148.76));
//! assert_eq!(result.tax_amount, dec!(31.24));
//! assert_eq!(result.line_total, dec!(180.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Money helpers, line items, document totals, validation, numbering |
//! | `tax` | Tax applicability resolver, AFIP alícuota codes |
//! | `voucher` | Voucher-type determination table, sale document builder |
//! | `qr` | AFIP fiscal QR payload, CUIT validation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "voucher")]
pub mod voucher;

#[cfg(feature = "qr")]
pub mod qr;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
