//! Formula errors.

use pk_core::PkError;
use thiserror::Error;

/// Result type for formula operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors raised while parsing or naming a formula string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// The formula string does not follow the supported grammar.
    #[error("Invalid formula '{formula}': {reason}")]
    InvalidFormula {
        formula: String,
        reason: &'static str,
    },
}

impl From<ChemError> for PkError {
    fn from(err: ChemError) -> Self {
        match err {
            ChemError::InvalidFormula { formula, reason } => PkError::InvalidArg {
                what: format!("formula '{formula}': {reason}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChemError::InvalidFormula {
            formula: "h2o".into(),
            reason: "expected element symbol",
        };
        assert!(err.to_string().contains("h2o"));
    }

    #[test]
    fn error_to_pk_error() {
        let err = ChemError::InvalidFormula {
            formula: "".into(),
            reason: "empty formula",
        };
        let pk: PkError = err.into();
        assert!(matches!(pk, PkError::InvalidArg { .. }));
    }
}
