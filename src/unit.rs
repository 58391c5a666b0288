//! Compilation units - one logical build from the analyzer
//!
//! A unit owns its scopes, its declarations (partitioned by category) and the
//! pragma directives of every file it compiled. Pragmas live on the unit, not
//! on the declarations, which is why resolution always needs both.

use crate::declaration::{Contract, Declaration, DeclarationKind};
use crate::pragma::PragmaDirective;
use crate::scope::{FileScopeId, ScopeArena};
use crate::source::Filename;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilationUnit {
    pub name: String,
    pub scopes: ScopeArena,
    pub contracts: Vec<Contract>,
    #[serde(alias = "enums")]
    pub enums_top_level: Vec<Declaration>,
    #[serde(alias = "structs")]
    pub structures_top_level: Vec<Declaration>,
    #[serde(alias = "events")]
    pub events_top_level: Vec<Declaration>,
    #[serde(alias = "errors")]
    pub custom_errors: Vec<Declaration>,
    #[serde(alias = "pragmas")]
    pub pragma_directives: Vec<PragmaDirective>,
}

impl CompilationUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Open a new file scope in this unit
    pub fn add_scope(&mut self, filename: Filename) -> FileScopeId {
        self.scopes.add_scope(filename)
    }

    pub fn add_contract(&mut self, contract: Contract) {
        self.contracts.push(contract);
    }

    pub fn add_enum(&mut self, declaration: Declaration) {
        self.enums_top_level.push(declaration);
    }

    pub fn add_struct(&mut self, declaration: Declaration) {
        self.structures_top_level.push(declaration);
    }

    pub fn add_event(&mut self, declaration: Declaration) {
        self.events_top_level.push(declaration);
    }

    pub fn add_error(&mut self, declaration: Declaration) {
        self.custom_errors.push(declaration);
    }

    pub fn add_pragma(&mut self, pragma: PragmaDirective) {
        self.pragma_directives.push(pragma);
    }

    /// Declarations of one report bucket, in collection order.
    ///
    /// Each contract lands in exactly one of the three contract-like buckets.
    pub fn declarations(&self, kind: DeclarationKind) -> Vec<&Declaration> {
        match kind {
            DeclarationKind::Contract | DeclarationKind::Interface | DeclarationKind::Library => self
                .contracts
                .iter()
                .filter(|c| c.kind() == kind)
                .map(|c| &c.declaration)
                .collect(),
            DeclarationKind::Enum => self.enums_top_level.iter().collect(),
            DeclarationKind::Struct => self.structures_top_level.iter().collect(),
            DeclarationKind::Event => self.events_top_level.iter().collect(),
            DeclarationKind::Error => self.custom_errors.iter().collect(),
        }
    }

    /// Total number of declarations across all categories
    pub fn declaration_count(&self) -> usize {
        self.contracts.len()
            + self.enums_top_level.len()
            + self.structures_top_level.len()
            + self.events_top_level.len()
            + self.custom_errors.len()
    }

    /// Check that every declaration and pragma points at a known scope
    pub fn validate(&self) -> Result<()> {
        let declared = self
            .contracts
            .iter()
            .map(|c| c.declaration.scope)
            .chain(self.enums_top_level.iter().map(|d| d.scope))
            .chain(self.structures_top_level.iter().map(|d| d.scope))
            .chain(self.events_top_level.iter().map(|d| d.scope))
            .chain(self.custom_errors.iter().map(|d| d.scope))
            .chain(self.pragma_directives.iter().map(|p| p.scope));

        for scope in declared {
            if !self.scopes.contains(scope) {
                return Err(Error::UnknownScope {
                    unit: self.name.clone(),
                    scope,
                });
            }
        }
        Ok(())
    }
}
