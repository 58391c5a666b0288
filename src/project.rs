//! Project snapshot - every compilation unit of one analyzer run
//!
//! The analyzer exports its units as JSON; this module loads and validates
//! that snapshot so the rest of the crate can treat it as read-only.

use crate::unit::CompilationUnit;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub compilation_units: Vec<CompilationUnit>,
}

impl Project {
    pub fn new(compilation_units: Vec<CompilationUnit>) -> Self {
        Self { compilation_units }
    }

    /// Parse and validate a JSON snapshot
    pub fn from_json_str(json: &str) -> Result<Self> {
        let project: Project = serde_json::from_str(json)?;
        project.validate()?;
        Ok(project)
    }

    /// Load and validate a JSON snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let project = Self::from_json_str(&contents)?;
        tracing::debug!(
            "Loaded {} compilation unit(s) from {}",
            project.compilation_units.len(),
            path.display()
        );
        Ok(project)
    }

    pub fn validate(&self) -> Result<()> {
        for unit in &self.compilation_units {
            unit.validate()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.compilation_units.is_empty()
    }
}
