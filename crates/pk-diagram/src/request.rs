//! Diagram kind and backend selection.

use crate::error::{DiagramError, DiagramResult};
use pk_acid::LabelStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What is plotted against pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    /// Alpha fraction of each species
    Distribution,
    /// log10 concentration of each species, plus pH/pOH reference lines (pC)
    #[serde(rename = "pC")]
    LogConcentration,
}

impl DiagramKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Distribution => "distribution",
            Self::LogConcentration => "pC",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Distribution => "Distribution diagram",
            Self::LogConcentration => "pC Diagram",
        }
    }
}

impl std::str::FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distribution" | "alpha" => Ok(Self::Distribution),
            "pc" | "logc" => Ok(Self::LogConcentration),
            _ => Err(DiagramError::InvalidArgument {
                what: format!("unknown diagram kind '{s}' (expected distribution or pC)"),
            }),
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Family of renderer the diagram is prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Static figures with math-markup labels
    Static,
    /// Interactive figures with markup-language labels
    Interactive,
}

impl Backend {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Interactive => "interactive",
        }
    }

    /// Label representation this backend renders.
    pub fn label_style(&self) -> LabelStyle {
        match self {
            Self::Static => LabelStyle::Latex,
            Self::Interactive => LabelStyle::Html,
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" | "matplotlib" => Ok(Self::Static),
            "interactive" | "plotly" => Ok(Self::Interactive),
            _ => Err(DiagramError::InvalidArgument {
                what: format!("unknown plot backend '{s}' (expected static or interactive)"),
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A diagram kind paired with the backend it is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagramRequest {
    pub kind: DiagramKind,
    pub backend: Backend,
}

impl DiagramRequest {
    pub fn new(kind: DiagramKind, backend: Backend) -> Self {
        Self { kind, backend }
    }

    /// Parse a kind/backend pair; either one unknown is an invalid argument.
    pub fn parse(kind: &str, backend: &str) -> DiagramResult<Self> {
        Ok(Self {
            kind: kind.parse()?,
            backend: backend.parse()?,
        })
    }
}

impl Default for DiagramRequest {
    fn default() -> Self {
        Self::new(DiagramKind::Distribution, Backend::Static)
    }
}
