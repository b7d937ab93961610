//! AFIP fiscal QR code payload and CUIT validation.
//!
//! Every authorized electronic voucher must print a QR code that links to
//! AFIP's verification page with the voucher data base64-encoded in the URL.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use factura::qr::*;
//! use rust_decimal_macros::dec;
//!
//! let input = FiscalQrInput {
//!     cuit: "30-71234567-1".into(),
//!     voucher_type_code: 6,
//!     sales_point: 2,
//!     voucher_number: 40,
//!     amount: dec!(121),
//!     document_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     customer_doc_type: ReceiverDocType::SinIdentificar.code(),
//!     customer_doc_number: None,
//!     cae: "75123456789012".into(),
//! };
//!
//! if can_generate_qr(&input.cae, &input.cuit) {
//!     let url = build_fiscal_qr_url(&input).unwrap();
//!     assert_eq!(decode_fiscal_qr_url(&url).unwrap().amount, 12100);
//! }
//! ```

mod cuit;
mod doc_type;
mod payload;

pub use cuit::{CuitFormatError, digits_only, format_cuit, validate_cuit};
pub use doc_type::ReceiverDocType;
pub use payload::{
    AFIP_QR_BASE_URL, FiscalQrInput, FiscalQrPayload, QR_VERSION, build_fiscal_qr_payload,
    build_fiscal_qr_url, can_generate_qr, decode_fiscal_qr_url, payload_json,
};
