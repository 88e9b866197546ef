//! Building models and diagrams from project definitions.

use crate::diagram::{Diagram, build_diagram};
use crate::error::{DiagramError, DiagramResult};
use crate::request::DiagramRequest;
use pk_acid::{AcidModel, GridSpec, PhGrid};
use pk_chem::FormulaNamer;
use pk_core::constants::PKW;
use pk_project::{AcidDef, AcidProject};
use std::sync::Arc;
use tracing::debug;

/// The project's grid, or the shared default grid when none is configured.
pub fn grid_from_project(project: &AcidProject) -> DiagramResult<Arc<PhGrid>> {
    match &project.grid {
        Some(def) => {
            let spec = GridSpec {
                start: def.start,
                end: def.end,
                step: def.step,
                pkw: def.pkw.unwrap_or(PKW),
            };
            Ok(Arc::new(PhGrid::new(spec)?))
        }
        None => Ok(PhGrid::shared()),
    }
}

pub fn model_from_def(def: &AcidDef, grid: Arc<PhGrid>) -> DiagramResult<AcidModel> {
    let model = AcidModel::with_grid(def.pka.clone(), def.concentration_mol_per_l, grid)?;
    let model = match &def.backbone {
        Some(backbone) => model.with_backbone(backbone)?,
        None => model,
    };
    debug!(acid = %def.id, steps = model.steps(), "built model from project");
    Ok(model)
}

/// Build the diagram with id `diagram_id` defined in `project`.
pub fn diagram_from_project(
    project: &AcidProject,
    diagram_id: &str,
    namer: &dyn FormulaNamer,
) -> DiagramResult<Diagram> {
    let def = project
        .diagram(diagram_id)
        .ok_or_else(|| DiagramError::InvalidArgument {
            what: format!("no diagram '{diagram_id}' in project '{}'", project.name),
        })?;
    let acid = project
        .acid(&def.acid_id)
        .ok_or_else(|| DiagramError::InvalidArgument {
            what: format!("diagram '{diagram_id}' references unknown acid '{}'", def.acid_id),
        })?;

    let request = DiagramRequest::parse(&def.kind, &def.backend)?;
    let model = model_from_def(acid, grid_from_project(project)?)?;
    let mut diagram = build_diagram(&model, request, namer)?;
    diagram.title = format!("{}: {}", acid.name, diagram.title);
    Ok(diagram)
}
