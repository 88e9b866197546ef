//! Project validation logic.

use crate::schema::{AcidDef, AcidProject, GridDef};
use pk_core::constants::MAX_GRID_POINTS;
use pk_core::numeric::ensure_finite;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &AcidProject) -> Result<(), ValidationError> {
    if project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if let Some(grid) = &project.grid {
        validate_grid(grid)?;
    }

    let mut acid_ids = HashSet::new();
    for acid in &project.acids {
        if !acid_ids.insert(acid.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: acid.id.clone(),
                context: "acids".to_string(),
            });
        }
        validate_acid(acid)?;
    }

    let mut diagram_ids = HashSet::new();
    for diagram in &project.diagrams {
        if !diagram_ids.insert(diagram.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: diagram.id.clone(),
                context: "diagrams".to_string(),
            });
        }
        if !acid_ids.contains(diagram.acid_id.as_str()) {
            return Err(ValidationError::MissingReference {
                id: diagram.acid_id.clone(),
                context: format!("diagram {} acid_id", diagram.id),
            });
        }
    }

    Ok(())
}

fn validate_acid(acid: &AcidDef) -> Result<(), ValidationError> {
    let c = acid.concentration_mol_per_l;
    if !c.is_finite() || c <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("acids.{}.concentration_mol_per_l", acid.id),
            value: c.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    for (i, &pka) in acid.pka.iter().enumerate() {
        ensure_finite(pka, "pKa").map_err(|err| ValidationError::InvalidValue {
            field: format!("acids.{}.pka[{i}]", acid.id),
            value: pka.to_string(),
            reason: err.to_string(),
        })?;
    }

    if let Some(backbone) = &acid.backbone
        && backbone.trim().is_empty()
    {
        return Err(ValidationError::InvalidValue {
            field: format!("acids.{}.backbone", acid.id),
            value: backbone.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

fn validate_grid(grid: &GridDef) -> Result<(), ValidationError> {
    let invalid = |field: &str, value: f64, reason: &str| ValidationError::InvalidValue {
        field: format!("grid.{field}"),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let fields = [
        ("start", Some(grid.start)),
        ("end", Some(grid.end)),
        ("step", Some(grid.step)),
        ("pkw", grid.pkw),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            ensure_finite(value, field).map_err(|err| invalid(field, value, &err.to_string()))?;
        }
    }
    if grid.step <= 0.0 {
        return Err(invalid("step", grid.step, "must be positive"));
    }
    if grid.end < grid.start {
        return Err(invalid("end", grid.end, "must not be below start"));
    }
    // Same point count as the pH grid builder, including its endpoint slack
    if ((grid.end - grid.start) / grid.step + 1e-9).floor() >= MAX_GRID_POINTS as f64 {
        return Err(invalid(
            "step",
            grid.step,
            &format!("gives more than {MAX_GRID_POINTS} points"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DiagramDef;

    fn acid(id: &str) -> AcidDef {
        AcidDef {
            id: id.to_string(),
            name: "Acetic acid".to_string(),
            pka: vec![4.76],
            concentration_mol_per_l: 0.05,
            backbone: None,
        }
    }

    fn project(acids: Vec<AcidDef>, diagrams: Vec<DiagramDef>) -> AcidProject {
        AcidProject {
            version: 1,
            name: "test".to_string(),
            grid: None,
            acids,
            diagrams,
        }
    }

    #[test]
    fn accepts_minimal_project() {
        validate_project(&project(vec![acid("a")], vec![])).unwrap();
    }

    #[test]
    fn rejects_duplicate_acid() {
        let err = validate_project(&project(vec![acid("a"), acid("a")], vec![])).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn rejects_dangling_diagram() {
        let diagram = DiagramDef {
            id: "d".to_string(),
            acid_id: "missing".to_string(),
            kind: "distribution".to_string(),
            backend: "static".to_string(),
        };
        let err = validate_project(&project(vec![acid("a")], vec![diagram])).unwrap_err();
        assert!(matches!(err, ValidationError::MissingReference { .. }));
    }

    #[test]
    fn rejects_non_positive_concentration() {
        let mut bad = acid("a");
        bad.concentration_mol_per_l = 0.0;
        let err = validate_project(&project(vec![bad], vec![])).unwrap_err();
        assert!(err.to_string().contains("concentration_mol_per_l"));
    }

    #[test]
    fn rejects_future_version() {
        let mut p = project(vec![], vec![]);
        p.version = crate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_bad_grid() {
        let mut p = project(vec![], vec![]);
        p.grid = Some(GridDef {
            start: 0.0,
            end: 14.0,
            step: 0.0,
            pkw: None,
        });
        let err = validate_project(&p).unwrap_err();
        assert!(err.to_string().contains("grid.step"));
    }

    #[test]
    fn rejects_non_finite_pka() {
        let mut bad = acid("a");
        bad.pka = vec![2.0, f64::NAN];
        let err = validate_project(&project(vec![bad], vec![])).unwrap_err();
        assert!(err.to_string().contains("acids.a.pka[1]"));
    }

    #[test]
    fn rejects_grid_with_too_many_points() {
        let mut p = project(vec![], vec![]);
        p.grid = Some(GridDef {
            start: 0.0,
            end: 1e300,
            step: 1e-300,
            pkw: None,
        });
        let err = validate_project(&p).unwrap_err();
        assert!(err.to_string().contains("grid.step"));

        p.grid = Some(GridDef {
            start: 0.0,
            end: 14.0,
            step: 0.01,
            pkw: Some(f64::INFINITY),
        });
        let err = validate_project(&p).unwrap_err();
        assert!(err.to_string().contains("grid.pkw"));
    }
}
