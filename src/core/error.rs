use thiserror::Error;

/// Errors that can occur while building or encoding fiscal documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturaError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Voucher number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Decimal arithmetic failure (division by zero, overflow).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Fiscal QR encoding or decoding error.
    #[error("QR error: {0}")]
    Qr(String),
}

/// One failed rule, rendered as `[rule] field: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier, e.g. `LI-01` or `IS-02`.
    pub rule: &'static str,
    /// Path of the offending value, e.g. `lines.0.quantity`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(rule: &'static str, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.field, self.message)
    }
}

/// Join a list of validation errors into a single `FacturaError::Validation`.
pub(crate) fn validation_failure(errors: &[ValidationError]) -> FacturaError {
    let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
    FacturaError::Validation(joined.join("; "))
}
