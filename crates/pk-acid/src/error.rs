//! Speciation errors.

use pk_chem::ChemError;
use pk_core::PkError;
use thiserror::Error;

/// Result type for speciation operations.
pub type AcidResult<T> = Result<T, AcidError>;

/// Errors that can occur while building or evaluating an acid model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcidError {
    /// Rejected constructor input (concentration, pKa, grid bounds).
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// Unrecognized request, e.g. an unknown label representation.
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    /// The formula naming service rejected a formula.
    #[error("Formula naming failed: {0}")]
    Naming(#[from] ChemError),
}

impl From<PkError> for AcidError {
    fn from(err: PkError) -> Self {
        match err {
            PkError::InvalidArg { what } => AcidError::InvalidArgument { what },
            other => AcidError::InvalidInput {
                what: other.to_string(),
            },
        }
    }
}

impl From<AcidError> for PkError {
    fn from(err: AcidError) -> Self {
        match err {
            AcidError::InvalidInput { what } => PkError::InvalidInput { what },
            AcidError::InvalidArgument { what } => PkError::InvalidArg { what },
            AcidError::Naming(chem) => chem.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AcidError::InvalidInput {
            what: "total concentration must be positive".into(),
        };
        assert!(err.to_string().contains("total concentration"));

        let err = AcidError::InvalidArgument {
            what: "unknown label style 'bogus'".into(),
        };
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn error_to_pk_error() {
        let err = AcidError::InvalidInput { what: "x".into() };
        assert!(matches!(PkError::from(err), PkError::InvalidInput { .. }));

        let err = AcidError::InvalidArgument { what: "y".into() };
        assert!(matches!(PkError::from(err), PkError::InvalidArg { .. }));
    }

    #[test]
    fn non_finite_becomes_invalid_input() {
        let err = AcidError::from(PkError::NonFinite {
            what: "pKa",
            value: f64::NAN,
        });
        match err {
            AcidError::InvalidInput { what } => assert!(what.contains("pKa")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
