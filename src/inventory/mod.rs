//! Inventory pipeline
//!
//! Filter → Collector → Resolver (per declaration) → Reporter, in one
//! synchronous pass over a read-only project snapshot. Nothing is kept
//! between runs; every call recomputes the report from the units.

pub mod collector;
pub mod filter;
pub mod report;
pub mod resolver;

pub use collector::{Collector, ReportRow};
pub use filter::{VendorFilter, DEFAULT_VENDOR_MARKER};
pub use report::Reporter;
pub use resolver::{PragmaResolver, Resolution, NO_VERSION_SPECIFIED, UNKNOWN_FILE};

use crate::output::PrinterOutput;
use crate::project::Project;
use crate::{Error, Result};
use std::str::FromStr;

/// Which declarations the report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    All,
    InterfacesOnly,
}

/// Nesting of the category and compilation-unit loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Every unit's contracts, then every unit's interfaces, ...
    #[default]
    CategoryMajor,
    /// All categories of the first unit, then the next unit, ...
    UnitMajor,
}

impl TraversalOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::CategoryMajor => "category",
            TraversalOrder::UnitMajor => "unit",
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "category" | "category-major" => Ok(TraversalOrder::CategoryMajor),
            "unit" | "unit-major" => Ok(TraversalOrder::UnitMajor),
            _ => Err(Error::InvalidOption(format!("unknown traversal order `{}`", s))),
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Knobs for one report run
#[derive(Debug, Clone, Default)]
pub struct InventoryOptions {
    pub mode: ReportMode,
    pub order: TraversalOrder,
    /// Markers added to the default `node_modules` marker
    pub vendor_markers: Vec<String>,
}

impl InventoryOptions {
    pub fn filter(&self) -> VendorFilter {
        VendorFilter::new(self.vendor_markers.iter().cloned())
    }
}

/// Collect the rows of `project` without rendering them
pub fn collect_rows(project: &Project, options: &InventoryOptions) -> Vec<ReportRow> {
    let filter = options.filter();
    Collector::new(&filter, options.mode, options.order).collect(&project.compilation_units)
}

/// Run the whole pipeline and build the report object
pub fn generate_report(project: &Project, options: &InventoryOptions) -> PrinterOutput {
    let rows = collect_rows(project, options);
    tracing::info!(
        "Collected {} declaration(s) from {} compilation unit(s)",
        rows.len(),
        project.compilation_units.len()
    );
    Reporter::render(&rows, options.mode)
}
