//! Species labels aligned with the alpha ordering.
//!
//! Labels are derived from the step count alone. Species k carries `n - k`
//! acidic hydrogens and charge `-k`, so for a diprotic acid the raw labels are
//! `H2A`, `HA-`, `A2-`. Formulas are first written around a placeholder
//! backbone `B`, which is swapped for the real backbone after naming.

use crate::error::{AcidError, AcidResult};
use pk_chem::{Formula, FormulaNamer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol standing in for the conjugate-base backbone while formulas are built.
pub const BACKBONE_PLACEHOLDER: &str = "B";

/// Backbone symbol used when none is configured.
pub const DEFAULT_BACKBONE: &str = "A";

/// Output representation for species labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Plain formula text, e.g. `HA-`
    Raw,
    /// Math markup, e.g. `HA^{-}`
    Latex,
    /// Markup language, e.g. `HA<sup>-</sup>`
    Html,
}

impl LabelStyle {
    pub const ALL: [LabelStyle; 3] = [LabelStyle::Raw, LabelStyle::Latex, LabelStyle::Html];

    pub fn key(&self) -> &'static str {
        match self {
            LabelStyle::Raw => "raw",
            LabelStyle::Latex => "latex",
            LabelStyle::Html => "html",
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for LabelStyle {
    type Err = AcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(LabelStyle::Raw),
            "latex" => Ok(LabelStyle::Latex),
            "html" => Ok(LabelStyle::Html),
            _ => Err(AcidError::InvalidArgument {
                what: format!("unknown label style '{s}' (expected raw, latex or html)"),
            }),
        }
    }
}

/// Identity of one protonation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId {
    /// Position in alpha order (0 = fully protonated)
    pub index: usize,
    /// Acidic hydrogens still attached
    pub hydrogens: usize,
    /// Net charge (0 down to -n)
    pub charge: i32,
}

impl SpeciesId {
    /// Formula around the placeholder backbone, e.g. `H2B-`.
    pub fn placeholder_formula(&self) -> AcidResult<Formula> {
        let mut parts = Vec::with_capacity(2);
        if self.hydrogens > 0 {
            let count = u32::try_from(self.hydrogens).map_err(|_| AcidError::InvalidInput {
                what: format!("too many acidic hydrogens ({})", self.hydrogens),
            })?;
            parts.push(("H".to_string(), count));
        }
        parts.push((BACKBONE_PLACEHOLDER.to_string(), 1));
        Ok(Formula::new(parts, self.charge)?)
    }
}

/// Species identities for an acid with `steps` dissociation steps, in alpha order.
pub fn species_ids(steps: usize) -> Vec<SpeciesId> {
    let count = steps + 1;
    (1..=count)
        .map(|position| SpeciesId {
            index: position - 1,
            hydrogens: count - position,
            charge: 1 - position as i32,
        })
        .collect()
}

/// Labels for every species of an acid with `steps` dissociation steps.
///
/// `backbone` replaces the placeholder in the final text. For the typeset
/// styles both the placeholder formula and the backbone are named through
/// `namer`, so a multi-atom backbone such as `PO4` gets its own subscripts.
pub fn species_labels(
    steps: usize,
    style: LabelStyle,
    backbone: &str,
    namer: &dyn FormulaNamer,
) -> AcidResult<Vec<String>> {
    let formulas = species_ids(steps)
        .iter()
        .map(SpeciesId::placeholder_formula)
        .collect::<AcidResult<Vec<_>>>()?;

    match style {
        LabelStyle::Raw => Ok(formulas
            .iter()
            .map(|f| f.to_string().replace(BACKBONE_PLACEHOLDER, backbone))
            .collect()),
        LabelStyle::Latex => {
            let backbone_name = namer.name_formula(backbone)?.latex;
            formulas
                .iter()
                .map(|f| -> AcidResult<String> {
                    let name = namer.name_formula(&f.naming_key())?.latex;
                    Ok(name.replace(BACKBONE_PLACEHOLDER, &backbone_name))
                })
                .collect()
        }
        LabelStyle::Html => {
            let backbone_name = namer.name_formula(backbone)?.html;
            formulas
                .iter()
                .map(|f| -> AcidResult<String> {
                    let name = namer.name_formula(&f.naming_key())?.html;
                    Ok(name.replace(BACKBONE_PLACEHOLDER, &backbone_name))
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_chem::StandardNamer;

    #[test]
    fn ids_for_diprotic() {
        let ids = species_ids(2);
        assert_eq!(
            ids,
            vec![
                SpeciesId {
                    index: 0,
                    hydrogens: 2,
                    charge: 0
                },
                SpeciesId {
                    index: 1,
                    hydrogens: 1,
                    charge: -1
                },
                SpeciesId {
                    index: 2,
                    hydrogens: 0,
                    charge: -2
                },
            ]
        );
    }

    #[test]
    fn raw_diprotic() {
        let labels = species_labels(2, LabelStyle::Raw, DEFAULT_BACKBONE, &StandardNamer).unwrap();
        assert_eq!(labels, ["H2A", "HA-", "A2-"]);
    }

    #[test]
    fn raw_zero_steps() {
        let labels = species_labels(0, LabelStyle::Raw, DEFAULT_BACKBONE, &StandardNamer).unwrap();
        assert_eq!(labels, ["A"]);
    }

    #[test]
    fn latex_triprotic() {
        let labels =
            species_labels(3, LabelStyle::Latex, DEFAULT_BACKBONE, &StandardNamer).unwrap();
        assert_eq!(labels, ["H_{3}A", "H_{2}A^{-}", "HA^{2-}", "A^{3-}"]);
    }

    #[test]
    fn html_triprotic() {
        let labels =
            species_labels(3, LabelStyle::Html, DEFAULT_BACKBONE, &StandardNamer).unwrap();
        assert_eq!(
            labels,
            [
                "H<sub>3</sub>A",
                "H<sub>2</sub>A<sup>-</sup>",
                "HA<sup>2-</sup>",
                "A<sup>3-</sup>",
            ]
        );
    }

    #[test]
    fn label_count_is_steps_plus_one() {
        for steps in 0..8 {
            for style in LabelStyle::ALL {
                let labels = species_labels(steps, style, DEFAULT_BACKBONE, &StandardNamer).unwrap();
                assert_eq!(labels.len(), steps + 1, "{style} with {steps} steps");
            }
        }
    }

    #[test]
    fn style_parsing() {
        assert_eq!("raw".parse::<LabelStyle>().unwrap(), LabelStyle::Raw);
        assert_eq!(" LaTeX ".parse::<LabelStyle>().unwrap(), LabelStyle::Latex);
        assert_eq!("html".parse::<LabelStyle>().unwrap(), LabelStyle::Html);

        let err = "bogus".parse::<LabelStyle>().unwrap_err();
        assert!(matches!(err, AcidError::InvalidArgument { .. }));
    }

    #[test]
    fn style_key_roundtrip() {
        for style in LabelStyle::ALL {
            assert_eq!(style.key().parse::<LabelStyle>().unwrap(), style);
        }
    }
}
