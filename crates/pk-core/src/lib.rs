//! pk-core: stable foundation for pkaflow.
//!
//! Contains:
//! - units (uom SI concentration type + constructors, water constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PkError, PkResult};
pub use numeric::*;
pub use units::*;
