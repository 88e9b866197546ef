//! Project schema definitions.

use pk_core::numeric::Real;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcidProject {
    pub version: u32,
    pub name: String,
    /// pH grid shared by every acid; the 0–14 / 0.1 default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridDef>,
    #[serde(default)]
    pub acids: Vec<AcidDef>,
    #[serde(default)]
    pub diagrams: Vec<DiagramDef>,
}

impl AcidProject {
    pub fn acid(&self, id: &str) -> Option<&AcidDef> {
        self.acids.iter().find(|a| a.id == id)
    }

    pub fn diagram(&self, id: &str) -> Option<&DiagramDef> {
        self.diagrams.iter().find(|d| d.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcidDef {
    pub id: String,
    pub name: String,
    /// Stepwise pKa values, first proton lost first
    #[serde(default)]
    pub pka: Vec<Real>,
    pub concentration_mol_per_l: Real,
    /// Conjugate-base backbone symbol used in labels (e.g. "PO4")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backbone: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub start: Real,
    pub end: Real,
    pub step: Real,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkw: Option<Real>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramDef {
    pub id: String,
    pub acid_id: String,
    /// "distribution" or "pC"
    pub kind: String,
    /// "static" or "interactive"
    pub backend: String,
}
