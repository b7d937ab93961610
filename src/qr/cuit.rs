//! CUIT/CUIL format and check-digit validation.

use std::fmt;

/// Error returned when a CUIT fails validation.
#[derive(Debug, Clone)]
pub struct CuitFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for CuitFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid CUIT '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for CuitFormatError {}

/// Person-type prefixes AFIP assigns.
const KNOWN_PREFIXES: [&str; 7] = ["20", "23", "24", "27", "30", "33", "34"];

const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a CUIT/CUIL and return its 11 bare digits.
///
/// Separators (`-`, `.`, spaces) are ignored. The type prefix must be one
/// AFIP assigns and the last digit must match the modulo-11 check digit.
pub fn validate_cuit(cuit: &str) -> Result<String, CuitFormatError> {
    let digits = digits_only(cuit);
    if digits.len() != 11 {
        return Err(CuitFormatError {
            value: cuit.into(),
            reason: format!("expected 11 digits, got {}", digits.len()),
        });
    }

    let prefix = &digits[..2];
    if !KNOWN_PREFIXES.contains(&prefix) {
        return Err(CuitFormatError {
            value: cuit.into(),
            reason: format!("unknown type prefix '{prefix}'"),
        });
    }

    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    let sum: u32 = values[..10]
        .iter()
        .zip(WEIGHTS)
        .map(|(d, w)| d * w)
        .sum();
    let expected = match 11 - sum % 11 {
        11 => 0,
        10 => {
            return Err(CuitFormatError {
                value: cuit.into(),
                reason: "body has no valid check digit".into(),
            });
        }
        n => n,
    };

    if values[10] != expected {
        return Err(CuitFormatError {
            value: cuit.into(),
            reason: format!("check digit {} does not match expected {expected}", values[10]),
        });
    }

    Ok(digits)
}

/// Validate and render a CUIT as `XX-XXXXXXXX-X`.
pub fn format_cuit(cuit: &str) -> Result<String, CuitFormatError> {
    let d = validate_cuit(cuit)?;
    Ok(format!("{}-{}-{}", &d[..2], &d[2..10], &d[10..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_with_dashes() {
        assert_eq!(validate_cuit("20-12345678-6").unwrap(), "20123456786");
    }

    #[test]
    fn valid_company() {
        assert!(validate_cuit("30-71234567-1").is_ok());
    }

    #[test]
    fn remainder_zero_check_digit() {
        assert!(validate_cuit("27123456780").is_ok());
    }

    #[test]
    fn wrong_check_digit() {
        let err = validate_cuit("20-12345678-9").unwrap_err();
        assert!(err.reason.contains("check digit"));
    }

    #[test]
    fn wrong_length() {
        assert!(validate_cuit("20-1234567-6").is_err());
        assert!(validate_cuit("").is_err());
    }

    #[test]
    fn unknown_prefix() {
        let err = validate_cuit("11-12345678-6").unwrap_err();
        assert!(err.reason.contains("prefix"));
    }

    #[test]
    fn formats_bare_digits() {
        assert_eq!(format_cuit("20123456786").unwrap(), "20-12345678-6");
        assert_eq!(format_cuit(" 30.71234567.1 ").unwrap(), "30-71234567-1");
    }

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("a1-2 3.4"), "1234");
    }
}
