//! Tax applicability and AFIP VAT rate codes.
//!
//! Decides which configured taxes apply to a line given the product's and
//! the counterparty's assignments and the issuer's own VAT condition.
//!
//! # Example
//!
//! ```
//! use factura::core::*;
//! use factura::tax::*;
//! use rust_decimal_macros::dec;
//!
//! let iva21 = TaxDefinitionBuilder::new("1", "IVA21", TaxType::Iva, dec!(21)).build();
//! let resolved = resolve_applicable_taxes(
//!     &[iva21],
//!     None,
//!     VatCondition::ResponsableInscripto,
//!     dec!(100),
//! );
//! assert_eq!(resolved.iva_amount, dec!(21.00));
//! assert_eq!(iva_rate_code(resolved.iva_rate), Some(IvaRateCode::General));
//! ```

mod alicuota;
mod resolver;

pub use alicuota::{IvaRateCode, iva_rate_code};
pub use resolver::{
    AppliedTax, ResolvedTaxes, applicable_tax_set, primary_iva, resolve_applicable_taxes,
};
