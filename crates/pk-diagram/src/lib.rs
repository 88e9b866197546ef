//! pk-diagram: backend-neutral speciation diagrams.
//!
//! Turns an [`pk_acid::AcidModel`] into the data a plotting backend needs:
//! x/y series, axis labels and species names typeset for that backend. No
//! drawing happens here.
//!
//! Two diagram kinds are supported:
//! - distribution: alpha of every species against pH
//! - pC: log10 concentration of every species against pH, with the pH and
//!   pOH reference lines
//!
//! for two backends: static (LaTeX labels) and interactive (HTML labels).
//!
//! # Example
//!
//! ```
//! use pk_acid::AcidModel;
//! use pk_chem::StandardNamer;
//! use pk_diagram::{DiagramRequest, build_diagram};
//!
//! let acid = AcidModel::new(vec![4.76], 0.05).unwrap();
//! let request = DiagramRequest::parse("pC", "interactive").unwrap();
//! let diagram = build_diagram(&acid, request, &StandardNamer).unwrap();
//! assert_eq!(diagram.series.len(), 4); // pH, pOH, HA, A-
//! ```

pub mod diagram;
pub mod error;
pub mod export;
pub mod project;
pub mod request;

pub use diagram::{Diagram, Series, SeriesRole, build_diagram};
pub use error::{DiagramError, DiagramResult};
pub use export::{to_csv, write_csv, write_json};
pub use project::{diagram_from_project, grid_from_project, model_from_def};
pub use request::{Backend, DiagramKind, DiagramRequest};
