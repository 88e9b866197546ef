//! pk-acid: polyprotic acid speciation for pkaflow.
//!
//! Provides:
//! - `AcidModel`: stepwise pKa values plus total analytical concentration
//! - `PhGrid`: the pH axis (with hydronium, pOH and hydroxide) curves are evaluated on
//! - the distribution engine: alpha fractions and log-concentrations per species
//! - species labeling: ordered formula labels in raw, LaTeX or HTML form
//!
//! # Example
//!
//! ```
//! use pk_acid::{AcidModel, LabelStyle};
//! use pk_chem::StandardNamer;
//!
//! let tyrosine = AcidModel::new(vec![2.17, 9.19, 10.47], 0.1).unwrap();
//! let alpha = tyrosine.alpha();
//! assert_eq!(alpha.len(), 4);
//! assert_eq!(alpha[0].len(), tyrosine.grid().len());
//!
//! let labels = tyrosine.species_labels(LabelStyle::Raw, &StandardNamer).unwrap();
//! assert_eq!(labels, ["H3A", "H2A-", "HA2-", "A3-"]);
//! ```

pub mod distribution;
pub mod error;
pub mod grid;
pub mod labels;
pub mod model;

// Re-exports for ergonomics
pub use distribution::{alpha_curves, fractions_at, log_concentration_curves};
pub use error::{AcidError, AcidResult};
pub use grid::{GridSpec, PhGrid};
pub use labels::{
    BACKBONE_PLACEHOLDER, DEFAULT_BACKBONE, LabelStyle, SpeciesId, species_ids, species_labels,
};
pub use model::AcidModel;
