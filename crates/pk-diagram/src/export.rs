//! CSV and JSON export of diagram data.
//!
//! CSV layout: one row per grid point, the pH column first and then one
//! column per series in diagram order, headed by the series name.
//!
//! ```csv
//! pH,HA,A-
//! 0,0.99998,1.7378e-5
//! ```

use crate::diagram::Diagram;
use crate::error::{DiagramError, DiagramResult};
use std::path::Path;
use tracing::info;

/// Render the diagram's series as CSV text.
pub fn to_csv(diagram: &Diagram) -> DiagramResult<String> {
    let x = match diagram.series.first() {
        Some(first) => &first.x,
        None => {
            return Err(DiagramError::InvalidArgument {
                what: "diagram has no series to export".to_string(),
            });
        }
    };
    if let Some(bad) = diagram.series.iter().find(|s| s.x != *x || s.y.len() != x.len()) {
        return Err(DiagramError::InvalidArgument {
            what: format!("series '{}' is not aligned with the pH axis", bad.name),
        });
    }

    let mut out = String::new();
    out.push_str(&csv_field(&diagram.x_label));
    for series in &diagram.series {
        out.push(',');
        out.push_str(&csv_field(&series.name));
    }
    out.push('\n');

    for (i, xv) in x.iter().enumerate() {
        out.push_str(&xv.to_string());
        for series in &diagram.series {
            out.push_str(&format!(",{}", series.y[i]));
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn write_csv(diagram: &Diagram, path: &Path) -> DiagramResult<()> {
    let content = to_csv(diagram)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), series = diagram.series.len(), "wrote diagram CSV");
    Ok(())
}

pub fn write_json(diagram: &Diagram, path: &Path) -> DiagramResult<()> {
    let content = serde_json::to_string_pretty(diagram)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), series = diagram.series.len(), "wrote diagram JSON");
    Ok(())
}

fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
