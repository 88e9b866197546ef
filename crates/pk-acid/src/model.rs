//! Equilibrium constant model for a polyprotic acid.

use crate::distribution::{alpha_curves, fractions_at, log_concentration_curves};
use crate::error::{AcidError, AcidResult};
use crate::grid::PhGrid;
use crate::labels::{
    DEFAULT_BACKBONE, LabelStyle, SpeciesId, species_ids, species_labels,
};
use pk_chem::{Formula, FormulaNamer};
use pk_core::numeric::{Real, ensure_finite, pow10};
use pk_core::units::{Concentration, mol_per_l, to_mol_per_l};
use std::sync::Arc;
use tracing::{debug, warn};

/// A polyprotic weak acid: stepwise pKa values and total concentration.
///
/// pKa values are taken in dissociation order (first proton lost first). The
/// order is not checked or corrected, since reordering would change which
/// proton each constant belongs to; see [`AcidModel::is_dissociation_ordered`].
#[derive(Debug, Clone)]
pub struct AcidModel {
    pka: Vec<Real>,
    ka: Vec<Real>,
    /// Total analytical concentration in mol/L
    total: Real,
    backbone: String,
    grid: Arc<PhGrid>,
}

impl AcidModel {
    /// Build a model on the shared default pH grid.
    pub fn new(pka: impl Into<Vec<Real>>, total_mol_per_l: Real) -> AcidResult<Self> {
        Self::with_grid(pka, total_mol_per_l, PhGrid::shared())
    }

    /// Build a model evaluated on a caller-supplied grid.
    pub fn with_grid(
        pka: impl Into<Vec<Real>>,
        total_mol_per_l: Real,
        grid: Arc<PhGrid>,
    ) -> AcidResult<Self> {
        let pka = pka.into();

        if !total_mol_per_l.is_finite() || total_mol_per_l <= 0.0 {
            return Err(AcidError::InvalidInput {
                what: format!("total concentration must be positive (got {total_mol_per_l})"),
            });
        }
        for &value in &pka {
            ensure_finite(value, "pKa")?;
        }

        let ka = pka.iter().map(|p| pow10(-p)).collect();
        let model = Self {
            pka,
            ka,
            total: total_mol_per_l,
            backbone: DEFAULT_BACKBONE.to_string(),
            grid,
        };

        if !model.is_dissociation_ordered() {
            warn!(
                pka = ?model.pka,
                "pKa values are not in ascending order; they are used as given"
            );
        }
        debug!(
            steps = model.steps(),
            total_mol_per_l,
            grid_points = model.grid.len(),
            "created acid model"
        );
        Ok(model)
    }

    /// Build a model from a dimensioned concentration.
    pub fn from_concentration(pka: impl Into<Vec<Real>>, total: Concentration) -> AcidResult<Self> {
        Self::new(pka, to_mol_per_l(total))
    }

    /// Replace the backbone symbol used in species labels (default `A`).
    pub fn with_backbone(mut self, backbone: &str) -> AcidResult<Self> {
        let formula = Formula::parse(backbone)?;
        if formula.charge() != 0 {
            return Err(AcidError::InvalidInput {
                what: format!("backbone '{backbone}' must be written without a charge"),
            });
        }
        self.backbone = formula.body();
        Ok(self)
    }

    pub fn pka(&self) -> &[Real] {
        &self.pka
    }

    /// Dissociation constants, `Ka[i] = 10^(-pKa[i])`.
    pub fn ka(&self) -> &[Real] {
        &self.ka
    }

    /// Number of dissociation steps (n).
    pub fn steps(&self) -> usize {
        self.pka.len()
    }

    /// Number of protonation states (n + 1).
    pub fn species_count(&self) -> usize {
        self.pka.len() + 1
    }

    /// Total analytical concentration in mol/L.
    pub fn total_concentration(&self) -> Real {
        self.total
    }

    pub fn total_concentration_si(&self) -> Concentration {
        mol_per_l(self.total)
    }

    pub fn backbone(&self) -> &str {
        &self.backbone
    }

    pub fn grid(&self) -> &PhGrid {
        &self.grid
    }

    pub fn grid_handle(&self) -> Arc<PhGrid> {
        Arc::clone(&self.grid)
    }

    /// True when pKa values are non-decreasing, the physically expected order.
    pub fn is_dissociation_ordered(&self) -> bool {
        self.pka.windows(2).all(|w| w[0] <= w[1])
    }

    /// Alpha curves, one per species (index 0 fully protonated), each aligned
    /// with the grid.
    pub fn alpha(&self) -> Vec<Vec<Real>> {
        alpha_curves(&self.pka, &self.grid)
    }

    /// Alpha fractions at a single pH, one per species.
    pub fn alpha_at(&self, ph: Real) -> AcidResult<Vec<Real>> {
        Ok(fractions_at(&self.pka, ensure_finite(ph, "pH")?))
    }

    /// `log10(alpha * Ca)` curves, same shape as [`AcidModel::alpha`].
    pub fn log_concentrations(&self) -> Vec<Vec<Real>> {
        log_concentration_curves(&self.alpha(), self.total)
    }

    /// Species identities in alpha order.
    pub fn species(&self) -> Vec<SpeciesId> {
        species_ids(self.steps())
    }

    /// Species labels in alpha order.
    pub fn species_labels(
        &self,
        style: LabelStyle,
        namer: &dyn FormulaNamer,
    ) -> AcidResult<Vec<String>> {
        species_labels(self.steps(), style, &self.backbone, namer)
    }

    /// String-keyed variant of [`AcidModel::species_labels`]
    /// (`"raw"`, `"latex"` or `"html"`).
    pub fn species_labels_str(
        &self,
        style: &str,
        namer: &dyn FormulaNamer,
    ) -> AcidResult<Vec<String>> {
        self.species_labels(style.parse()?, namer)
    }
}
