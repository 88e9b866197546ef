//! The pH axis speciation curves are evaluated on.
//!
//! A grid is described by a [`GridSpec`] (bounds, step, pKw) and materialized
//! once into a [`PhGrid`] holding pH together with the derived hydronium, pOH
//! and hydroxide arrays. The default 0–14 grid is built lazily on first use and
//! shared for the lifetime of the process.

use crate::error::{AcidError, AcidResult};
use pk_core::constants::{MAX_GRID_POINTS, PKW};
use pk_core::numeric::{Real, ensure_finite, pow10};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Bounds and spacing of a pH grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// First pH value
    pub start: Real,
    /// Last pH value (inclusive, when it lies on a step)
    pub end: Real,
    /// Spacing between points
    pub step: Real,
    /// Water ion product as a p-value, used for pOH
    #[serde(default = "default_pkw")]
    pub pkw: Real,
}

fn default_pkw() -> Real {
    PKW
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 14.0,
            step: 0.1,
            pkw: PKW,
        }
    }
}

impl GridSpec {
    /// Check the spec and return the number of points it produces.
    pub fn point_count(&self) -> AcidResult<usize> {
        ensure_finite(self.start, "grid start")?;
        ensure_finite(self.end, "grid end")?;
        ensure_finite(self.step, "grid step")?;
        ensure_finite(self.pkw, "grid pkw")?;
        if self.step <= 0.0 {
            return Err(AcidError::InvalidInput {
                what: format!("grid step must be positive (got {})", self.step),
            });
        }
        if self.end < self.start {
            return Err(AcidError::InvalidInput {
                what: format!(
                    "grid end {} is below grid start {}",
                    self.end, self.start
                ),
            });
        }

        let intervals = self.intervals();
        if !intervals.is_finite() || intervals >= MAX_GRID_POINTS as Real {
            return Err(AcidError::InvalidInput {
                what: format!("{self} exceeds {MAX_GRID_POINTS} points"),
            });
        }
        Ok(intervals as usize + 1)
    }

    /// Whole steps between start and end, in floating point.
    fn intervals(&self) -> Real {
        // Small slack so that e.g. 14.0 / 0.1 = 139.99999999999997 keeps its endpoint
        ((self.end - self.start) / self.step + 1e-9).floor()
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pH {} to {} step {} (pKw {})",
            self.start, self.end, self.step, self.pkw
        )
    }
}

/// Materialized pH grid with its derived water-equilibrium arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct PhGrid {
    spec: GridSpec,
    ph: Vec<Real>,
    hydronium: Vec<Real>,
    poh: Vec<Real>,
    hydroxide: Vec<Real>,
}

static SHARED: OnceLock<Arc<PhGrid>> = OnceLock::new();

impl PhGrid {
    /// Build a grid from a spec.
    pub fn new(spec: GridSpec) -> AcidResult<Self> {
        let len = spec.point_count()?;
        Ok(Self::build(spec, len))
    }

    /// The default 0–14 grid (step 0.1, 141 points), built once per process.
    pub fn shared() -> Arc<PhGrid> {
        SHARED
            .get_or_init(|| {
                let spec = GridSpec::default();
                Arc::new(Self::build(spec, spec.intervals() as usize + 1))
            })
            .clone()
    }

    fn build(spec: GridSpec, len: usize) -> Self {
        // Points are start + i*step so rounding does not accumulate along the axis
        let ph: Vec<Real> = (0..len)
            .map(|i| spec.start + i as Real * spec.step)
            .collect();
        let hydronium = ph.iter().map(|p| pow10(-p)).collect();
        let poh: Vec<Real> = ph.iter().map(|p| spec.pkw - p).collect();
        let hydroxide = poh.iter().map(|p| pow10(-p)).collect();

        debug!(%spec, points = len, "built pH grid");

        Self {
            spec,
            ph,
            hydronium,
            poh,
            hydroxide,
        }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn ph(&self) -> &[Real] {
        &self.ph
    }

    /// `[H3O+] = 10^(-pH)` in mol/L.
    pub fn hydronium(&self) -> &[Real] {
        &self.hydronium
    }

    /// `pOH = pKw - pH`.
    pub fn poh(&self) -> &[Real] {
        &self.poh
    }

    /// `[OH-] = 10^(-pOH)` in mol/L.
    pub fn hydroxide(&self) -> &[Real] {
        &self.hydroxide
    }

    pub fn len(&self) -> usize {
        self.ph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ph.is_empty()
    }

    /// Index of the grid point closest to `ph`.
    pub fn nearest_index(&self, ph: Real) -> Option<usize> {
        if !ph.is_finite() {
            return None;
        }
        let raw = ((ph - self.spec.start) / self.spec.step).round();
        if raw <= 0.0 {
            return Some(0);
        }
        Some((raw as usize).min(self.len() - 1))
    }
}
