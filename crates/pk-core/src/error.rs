use thiserror::Error;

pub type PkResult<T> = Result<T, PkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
