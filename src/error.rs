//! Error type shared by every pipeline stage.
//!
//! Filter rejection is never an error: a filter answers `false` and the
//! candidate is pruned. The variants here are configuration mistakes and
//! verifier type mismatches, which must surface loudly.

use thiserror::Error;

/// Errors raised by the job-matrix pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A comparison operator string could not be parsed, or an operator
    /// was used where it is not supported (e.g. `<` on a name).
    #[error("invalid comparison operator '{op}': expected one of {expected}")]
    InvalidOperator { op: String, expected: &'static str },

    /// A pin was requested with no required attributes.
    #[error("pin requirement must not be empty")]
    EmptyRequirement,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two facts of different kinds were compared.
    #[error("type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        found: String,
    },

    /// A reserved column holds values of the wrong shape.
    #[error("parameter '{parameter}': {detail}")]
    ReservedShape { parameter: String, detail: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MatrixError::InvalidOperator {
            op: "=~".into(),
            expected: "==, !=",
        };
        assert_eq!(
            err.to_string(),
            "invalid comparison operator '=~': expected one of ==, !="
        );
        assert_eq!(
            MatrixError::EmptyRequirement.to_string(),
            "pin requirement must not be empty"
        );
        assert_eq!(
            MatrixError::InvalidConfig("wave_size must be at least 1".into()).to_string(),
            "invalid configuration: wave_size must be at least 1"
        );
    }
}
