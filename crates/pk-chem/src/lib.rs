//! pk-chem: chemical formula parsing and typeset naming for pkaflow.
//!
//! Provides:
//! - `Formula`: element/count body plus an integer ionic charge
//! - `charge_to_string`: the one charge rendering used everywhere
//! - `FormulaNamer`: the seam through which formula strings are turned into
//!   LaTeX and HTML names, with `StandardNamer` as the built-in implementation
//!
//! # Example
//!
//! ```
//! use pk_chem::{FormulaNamer, StandardNamer};
//!
//! let names = StandardNamer.name_formula("H2PO4-").unwrap();
//! assert_eq!(names.latex, "H_{2}PO_{4}^{-}");
//! assert_eq!(names.html, "H<sub>2</sub>PO<sub>4</sub><sup>-</sup>");
//! ```

pub mod error;
pub mod formula;
pub mod naming;

pub use error::{ChemError, ChemResult};
pub use formula::{Formula, charge_to_string};
pub use naming::{FormulaNamer, FormulaNames, StandardNamer};
