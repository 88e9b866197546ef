//! pk-project: acid definition files and their validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_project};

use tracing::info;

/// Newest project file version this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<AcidProject> {
    let content = std::fs::read_to_string(path)?;
    let project = from_yaml_str(&content)?;
    info!(path = %path.display(), acids = project.acids.len(), "loaded project");
    Ok(project)
}

pub fn from_yaml_str(content: &str) -> ProjectResult<AcidProject> {
    let project: AcidProject = serde_yaml::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &AcidProject) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved project");
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<AcidProject> {
    let content = std::fs::read_to_string(path)?;
    let project: AcidProject = serde_json::from_str(&content)?;
    validate_project(&project)?;
    info!(path = %path.display(), acids = project.acids.len(), "loaded project");
    Ok(project)
}

pub fn save_json(path: &std::path::Path, project: &AcidProject) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved project");
    Ok(())
}
