//! Diagram assembly.

use crate::error::DiagramResult;
use crate::request::{Backend, DiagramKind, DiagramRequest};
use pk_acid::AcidModel;
use pk_chem::FormulaNamer;
use pk_core::numeric::Real;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Lower/upper y bounds of a pC diagram.
pub const PC_Y_RANGE: (Real, Real) = (-14.0, 0.0);

/// What a series represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesRole {
    /// Guide line (pH or pOH), drawn dashed
    Reference,
    /// Curve of one protonation state
    Species { index: usize },
}

/// One line of a diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend text, typeset for the target backend
    pub name: String,
    pub role: SeriesRole,
    pub x: Vec<Real>,
    pub y: Vec<Real>,
}

/// Everything a renderer needs to draw one diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    pub kind: DiagramKind,
    pub backend: Backend,
    pub x_label: String,
    pub y_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_range: Option<(Real, Real)>,
    pub series: Vec<Series>,
}

impl Diagram {
    /// Species curves only, in alpha order.
    pub fn species_series(&self) -> impl Iterator<Item = &Series> + '_ {
        self.series
            .iter()
            .filter(|s| matches!(s.role, SeriesRole::Species { .. }))
    }
}

/// Build the requested diagram for `model`.
pub fn build_diagram(
    model: &AcidModel,
    request: DiagramRequest,
    namer: &dyn FormulaNamer,
) -> DiagramResult<Diagram> {
    let grid = model.grid();
    let x = grid.ph().to_vec();
    let labels = model.species_labels(request.backend.label_style(), namer)?;

    let mut series = Vec::with_capacity(model.species_count() + 2);
    let (curves, y_label, y_range) = match request.kind {
        DiagramKind::Distribution => (model.alpha(), r"$\alpha$", None),
        DiagramKind::LogConcentration => {
            // log10[H3O+] = -pH and log10[OH-] = -pOH
            series.push(Series {
                name: "pH".to_string(),
                role: SeriesRole::Reference,
                x: x.clone(),
                y: grid.ph().iter().map(|p| -p).collect(),
            });
            series.push(Series {
                name: "pOH".to_string(),
                role: SeriesRole::Reference,
                x: x.clone(),
                y: grid.poh().iter().map(|p| -p).collect(),
            });
            let y_label = match request.backend {
                Backend::Static => r"$\log c$",
                Backend::Interactive => "logC",
            };
            (model.log_concentrations(), y_label, Some(PC_Y_RANGE))
        }
    };

    for (index, (label, y)) in labels.into_iter().zip(curves).enumerate() {
        let name = match request.backend {
            Backend::Static => format!("${label}$"),
            Backend::Interactive => label,
        };
        series.push(Series {
            name,
            role: SeriesRole::Species { index },
            x: x.clone(),
            y,
        });
    }

    info!(
        kind = %request.kind,
        backend = %request.backend,
        species = model.species_count(),
        points = x.len(),
        "built diagram"
    );

    Ok(Diagram {
        title: request.kind.title().to_string(),
        kind: request.kind,
        backend: request.backend,
        x_label: "pH".to_string(),
        y_label: y_label.to_string(),
        y_range,
        series,
    })
}
