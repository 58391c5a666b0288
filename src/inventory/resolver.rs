//! Pragma Resolver - maps a declaration to the pragmas of its file scope
//!
//! Resolution algorithm:
//! 1. Take the declaration's file scope (a missing location does not matter)
//! 2. Scan the owning unit's pragma directives
//! 3. Keep solidity version pragmas whose scope *is* that scope
//! 4. Deduplicate the version expressions and join them with ", "
//! 5. If nothing matched → "No version specified"

use super::filter::VendorFilter;
use crate::declaration::Declaration;
use crate::scope::FileScopeId;
use crate::unit::CompilationUnit;
use std::collections::BTreeSet;

/// Version cell for a scope without any version pragma
pub const NO_VERSION_SPECIFIED: &str = "No version specified";

/// File cell for a declaration without a source location
pub const UNKNOWN_FILE: &str = "Unknown";

/// Outcome of resolving one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        version_range: String,
        file: String,
    },
    /// The display path turned out to be vendored
    Skipped,
}

/// Resolver bound to the compilation unit that owns the declarations
pub struct PragmaResolver<'a> {
    unit: &'a CompilationUnit,
    filter: &'a VendorFilter,
}

impl<'a> PragmaResolver<'a> {
    pub fn new(unit: &'a CompilationUnit, filter: &'a VendorFilter) -> Self {
        Self { unit, filter }
    }

    /// Resolve the version range and display path of a declaration
    pub fn resolve(&self, declaration: &Declaration) -> Resolution {
        let relative = declaration.relative_path();

        // Paths can reach us in a different form than the collector saw
        if self.filter.is_excluded(relative) {
            return Resolution::Skipped;
        }

        let versions = self.versions_for_scope(declaration.scope);
        let version_range = if versions.is_empty() {
            NO_VERSION_SPECIFIED.to_string()
        } else {
            versions.into_iter().collect::<Vec<_>>().join(", ")
        };

        Resolution::Resolved {
            version_range,
            file: relative.unwrap_or(UNKNOWN_FILE).to_string(),
        }
    }

    /// Distinct version expressions declared in exactly this scope
    pub fn versions_for_scope(&self, scope: FileScopeId) -> BTreeSet<String> {
        self.unit
            .pragma_directives
            .iter()
            .filter(|p| p.is_solidity_version() && p.scope == scope)
            .map(|p| p.version())
            .collect()
    }
}
