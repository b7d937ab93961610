//! AFIP fiscal QR payload (RG 4892).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cuit::digits_only;
use crate::core::{FacturaError, to_minor_units};

/// Base URL every fiscal QR code points to.
pub const AFIP_QR_BASE_URL: &str = "https://www.afip.gob.ar/fe/qr/";

/// Payload format version.
pub const QR_VERSION: u8 = 1;

/// Data needed to print the fiscal QR of an authorized voucher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalQrInput {
    /// Issuer CUIT, separators allowed.
    pub cuit: String,
    /// AFIP voucher type code (1 = Factura A, 6 = Factura B, ...).
    pub voucher_type_code: u16,
    pub sales_point: u32,
    pub voucher_number: u64,
    /// Voucher total.
    pub amount: Decimal,
    /// Issue date as a calendar date.
    pub document_date: NaiveDate,
    /// Receiver document type (80 = CUIT, 96 = DNI, 99 = none).
    pub customer_doc_type: u16,
    /// Receiver document number; `None` encodes as 0.
    pub customer_doc_number: Option<String>,
    /// CAE returned by AFIP.
    pub cae: String,
}

/// JSON object encoded in the QR, keys and order as AFIP publishes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalQrPayload {
    #[serde(rename = "ver")]
    pub version: u8,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    pub cuit: u64,
    #[serde(rename = "ptoVta")]
    pub sales_point: u32,
    #[serde(rename = "tipoCmp")]
    pub voucher_type_code: u16,
    #[serde(rename = "nroCmp")]
    pub voucher_number: u64,
    /// Amount × 100, as an integer.
    #[serde(rename = "importe")]
    pub amount: i64,
    #[serde(rename = "moneda")]
    pub currency: String,
    #[serde(rename = "ctz")]
    pub exchange_rate: u32,
    #[serde(rename = "tipoDocRec")]
    pub customer_doc_type: u16,
    #[serde(rename = "nroDocRec")]
    pub customer_doc_number: u64,
    /// "E" for CAE.
    #[serde(rename = "tipoCodAut")]
    pub auth_code_type: String,
    #[serde(rename = "codAut")]
    pub auth_code: u64,
}

/// Whether a voucher has what the fiscal QR needs. Callers skip the QR
/// (rather than fail) when this is false.
pub fn can_generate_qr(cae: &str, cuit: &str) -> bool {
    !cae.trim().is_empty() && !cuit.trim().is_empty()
}

fn parse_digits(field: &str, value: &str) -> Result<u64, FacturaError> {
    let digits = digits_only(value);
    digits
        .parse()
        .map_err(|_| FacturaError::Qr(format!("{field} '{value}' is not a number")))
}

/// Build the payload for `input`.
///
/// Only fails when a numeric field has no digits or overflows; it does not
/// check CUIT or CAE validity (see [`can_generate_qr`]).
pub fn build_fiscal_qr_payload(input: &FiscalQrInput) -> Result<FiscalQrPayload, FacturaError> {
    let customer_doc_number = match input.customer_doc_number.as_deref().map(digits_only) {
        Some(digits) if !digits.is_empty() => parse_digits("customer document", &digits)?,
        _ => 0,
    };

    Ok(FiscalQrPayload {
        version: QR_VERSION,
        date: input.document_date,
        cuit: parse_digits("CUIT", &input.cuit)?,
        sales_point: input.sales_point,
        voucher_type_code: input.voucher_type_code,
        voucher_number: input.voucher_number,
        amount: to_minor_units(input.amount)?,
        currency: "PES".to_string(),
        exchange_rate: 1,
        customer_doc_type: input.customer_doc_type,
        customer_doc_number,
        auth_code_type: "E".to_string(),
        auth_code: parse_digits("CAE", &input.cae)?,
    })
}

/// Serialize a payload to the compact JSON AFIP expects.
pub fn payload_json(payload: &FiscalQrPayload) -> Result<String, FacturaError> {
    serde_json::to_string(payload).map_err(|e| FacturaError::Qr(e.to_string()))
}

/// Build the URL to encode in the printed QR code:
/// `https://www.afip.gob.ar/fe/qr/?p=<base64 JSON>`.
pub fn build_fiscal_qr_url(input: &FiscalQrInput) -> Result<String, FacturaError> {
    let payload = build_fiscal_qr_payload(input)?;
    let json = payload_json(&payload)?;
    Ok(format!("{AFIP_QR_BASE_URL}?p={}", STANDARD.encode(json.as_bytes())))
}

/// Decode the payload from a fiscal QR URL.
pub fn decode_fiscal_qr_url(url: &str) -> Result<FiscalQrPayload, FacturaError> {
    let (_, query) = url
        .split_once('?')
        .ok_or_else(|| FacturaError::Qr("URL has no query string".into()))?;
    let encoded = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("p="))
        .ok_or_else(|| FacturaError::Qr("URL has no 'p' parameter".into()))?;
    let json = STANDARD
        .decode(encoded)
        .map_err(|e| FacturaError::Qr(format!("invalid base64: {e}")))?;
    serde_json::from_slice(&json).map_err(|e| FacturaError::Qr(format!("invalid payload: {e}")))
}
