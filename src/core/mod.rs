//! Core fiscal types, money helpers, line-item calculation, and numbering.
//!
//! This module provides the value structures shared by every other module
//! and the VAT-inclusive/exclusive line calculation used for Factura A, B
//! and C vouchers.

mod builder;
mod calculation;
mod error;
pub mod money;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use calculation::*;
pub use error::*;
pub use money::{round_money, to_minor_units};
pub use numbering::*;
pub use types::*;
pub use validation::*;

pub(crate) use error::validation_failure;
pub(crate) use validation::{validate_line_input_at, validate_tax_definition_at};
