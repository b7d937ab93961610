//! Voucher-type determination and sale document assembly.
//!
//! Picks the legal voucher (Factura A/B/C, notas de crédito y débito) from
//! the issuer's and the customer's VAT conditions, and ties line
//! calculation, tax resolution and totals together for one document.
//!
//! # Example
//!
//! ```
//! use factura::core::VatCondition;
//! use factura::voucher::*;
//!
//! let d = determine_voucher_type(
//!     VatCondition::ResponsableInscripto,
//!     Some(VatCondition::ConsumidorFinal),
//! );
//! assert_eq!(d.voucher_type, VoucherType::FcB);
//! assert!(!d.discriminate_vat);
//! assert_eq!(d.voucher_type.code(), 6);
//! ```

mod document;
mod table;
mod types;

pub use document::{
    MAX_DOCUMENT_LINES, SaleDocument, SaleDocumentBuilder, SaleDocumentLine, SaleLine,
};
pub use table::{
    DEFAULT_DETERMINATION, VOUCHER_RULES, VoucherDetermination, VoucherRule,
    determine_voucher_type, determine_voucher_type_for, determine_voucher_type_from_codes,
    voucher_rules,
};
pub use types::{DocumentKind, VoucherClass, VoucherType};
