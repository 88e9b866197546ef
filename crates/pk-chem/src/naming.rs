//! Typeset names for formula strings.
//!
//! Everything that needs a LaTeX or HTML rendering of a formula goes through
//! [`FormulaNamer`], so a different naming backend can be swapped in without
//! touching callers.

use crate::error::ChemResult;
use crate::formula::{Formula, charge_to_string};
use serde::{Deserialize, Serialize};

/// Typeset names produced for one formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaNames {
    /// Math-markup name, e.g. `H_{2}A^{-}`
    pub latex: String,
    /// Markup-language name, e.g. `H<sub>2</sub>A<sup>-</sup>`
    pub html: String,
}

/// Service turning a formula string into its typeset names.
pub trait FormulaNamer: Send + Sync {
    fn name_formula(&self, formula: &str) -> ChemResult<FormulaNames>;
}

/// Built-in namer: counts become subscripts, the charge a superscript.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNamer;

impl FormulaNamer for StandardNamer {
    fn name_formula(&self, formula: &str) -> ChemResult<FormulaNames> {
        let parsed = Formula::parse(formula)?;
        Ok(FormulaNames {
            latex: latex_name(&parsed),
            html: html_name(&parsed),
        })
    }
}

fn latex_name(formula: &Formula) -> String {
    let mut out = String::new();
    for (symbol, count) in formula.parts() {
        out.push_str(symbol);
        if *count > 1 {
            out.push_str(&format!("_{{{count}}}"));
        }
    }
    if formula.charge() != 0 {
        out.push_str(&format!("^{{{}}}", charge_to_string(formula.charge())));
    }
    out
}

fn html_name(formula: &Formula) -> String {
    let mut out = String::new();
    for (symbol, count) in formula.parts() {
        out.push_str(symbol);
        if *count > 1 {
            out.push_str(&format!("<sub>{count}</sub>"));
        }
    }
    if formula.charge() != 0 {
        out.push_str(&format!("<sup>{}</sup>", charge_to_string(formula.charge())));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_neutral_formula() {
        let names = StandardNamer.name_formula("H3B").unwrap();
        assert_eq!(names.latex, "H_{3}B");
        assert_eq!(names.html, "H<sub>3</sub>B");
    }

    #[test]
    fn names_single_charge() {
        let names = StandardNamer.name_formula("HB-").unwrap();
        assert_eq!(names.latex, "HB^{-}");
        assert_eq!(names.html, "HB<sup>-</sup>");
    }

    #[test]
    fn names_multi_charge() {
        let names = StandardNamer.name_formula("B/3-").unwrap();
        assert_eq!(names.latex, "B^{3-}");
        assert_eq!(names.html, "B<sup>3-</sup>");
    }

    #[test]
    fn names_cation() {
        let names = StandardNamer.name_formula("NH4+").unwrap();
        assert_eq!(names.latex, "NH_{4}^{+}");
        assert_eq!(names.html, "NH<sub>4</sub><sup>+</sup>");
    }

    #[test]
    fn rejects_garbage() {
        assert!(StandardNamer.name_formula("not a formula").is_err());
    }

    #[test]
    fn namer_is_object_safe() {
        let namer: Box<dyn FormulaNamer> = Box::new(StandardNamer);
        assert_eq!(namer.name_formula("A").unwrap().latex, "A");
    }
}
