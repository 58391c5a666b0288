//! Collector - walks compilation units and builds report rows
//!
//! Rows are appended in visiting order and never sorted afterwards, so the
//! traversal order below is part of the output format.

use super::filter::VendorFilter;
use super::resolver::{PragmaResolver, Resolution};
use super::{ReportMode, TraversalOrder};
use crate::declaration::{Declaration, DeclarationKind};
use crate::unit::CompilationUnit;
use serde::Serialize;
use tabled::Tabled;

/// One line of the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub kind: DeclarationKind,
    #[tabled(rename = "File")]
    pub file: String,
    #[tabled(rename = "Pragma Version")]
    pub version_range: String,
}

pub struct Collector<'a> {
    filter: &'a VendorFilter,
    mode: ReportMode,
    order: TraversalOrder,
}

impl<'a> Collector<'a> {
    pub fn new(filter: &'a VendorFilter, mode: ReportMode, order: TraversalOrder) -> Self {
        Self {
            filter,
            mode,
            order,
        }
    }

    /// Kinds visited in this mode, in report order
    pub fn kinds(&self) -> &'static [DeclarationKind] {
        match self.mode {
            ReportMode::All => DeclarationKind::all(),
            ReportMode::InterfacesOnly => &[DeclarationKind::Interface],
        }
    }

    /// Build the rows for every surviving declaration across all units
    pub fn collect(&self, units: &[CompilationUnit]) -> Vec<ReportRow> {
        let mut rows = Vec::new();

        match self.order {
            TraversalOrder::CategoryMajor => {
                for &kind in self.kinds() {
                    for unit in units {
                        self.collect_kind(unit, kind, &mut rows);
                    }
                }
            }
            TraversalOrder::UnitMajor => {
                for unit in units {
                    for &kind in self.kinds() {
                        self.collect_kind(unit, kind, &mut rows);
                    }
                }
            }
        }

        rows
    }

    fn collect_kind(&self, unit: &CompilationUnit, kind: DeclarationKind, rows: &mut Vec<ReportRow>) {
        let resolver = PragmaResolver::new(unit, self.filter);

        for declaration in unit.declarations(kind) {
            if let Some(row) = self.collect_one(&resolver, declaration, kind) {
                rows.push(row);
            }
        }
    }

    fn collect_one(
        &self,
        resolver: &PragmaResolver<'_>,
        declaration: &Declaration,
        kind: DeclarationKind,
    ) -> Option<ReportRow> {
        if self.filter.is_excluded(declaration.path()) {
            tracing::debug!("Skipping vendored {} {}", kind, declaration.name);
            return None;
        }

        match resolver.resolve(declaration) {
            Resolution::Resolved { version_range, file } => Some(ReportRow {
                name: declaration.name.clone(),
                kind,
                file,
                version_range,
            }),
            Resolution::Skipped => {
                tracing::debug!("Skipping vendored {} {} (display path)", kind, declaration.name);
                None
            }
        }
    }
}
