//! Error types for the validation system

use derive_more::derive::Display;
use thiserror::Error;

/// Returned whenever a value does not satisfy its kind's grammar or the
/// constraints configured for it. The reason for the rejection is logged
/// at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("invalid input")]
pub struct InvalidInput;

/// Malformed validator options, rejected when the options are built.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("max range {max} is lower than min range {min}")]
    InvertedRange { min: i64, max: i64 },

    #[error("decimal separator must be a single non-digit character, got {0:?}")]
    DecimalSeparator(String),

    #[error("invalid regular expression")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        assert_eq!(InvalidInput.to_string(), "invalid input");
    }

    #[test]
    fn test_options_error_messages() {
        let err = OptionsError::InvertedRange { min: 10, max: 1 };
        assert_eq!(err.to_string(), "max range 1 is lower than min range 10");

        let err = OptionsError::DecimalSeparator("..".to_string());
        assert_eq!(
            err.to_string(),
            "decimal separator must be a single non-digit character, got \"..\""
        );
    }
}
