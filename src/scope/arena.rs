//! Scope arena - per compilation unit storage for file scopes
//!
//! The arena tracks:
//! - Scope identities (sequential ids, never reused)
//! - The root file of each scope
//! - Additional physical files folded into a scope

use crate::source::Filename;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a file scope within one compilation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileScopeId(pub u32);

impl fmt::Display for FileScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A logical file scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileScope {
    pub id: FileScopeId,
    /// The file the scope was opened for
    pub filename: Filename,
    /// Other physical files sharing this scope
    #[serde(default)]
    pub includes: Vec<Filename>,
}

impl FileScope {
    /// Check whether a physical file belongs to this scope
    pub fn covers(&self, path: &str) -> bool {
        self.filename.matches(path) || self.includes.iter().any(|f| f.matches(path))
    }
}

/// Arena of file scopes, indexed by `FileScopeId`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeArena {
    scopes: Vec<FileScope>,
}

impl ScopeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new scope rooted at `filename`
    pub fn add_scope(&mut self, filename: Filename) -> FileScopeId {
        // Loaded arenas may have gaps, so continue after the highest id
        let id = FileScopeId(self.scopes.iter().map(|s| s.id.0 + 1).max().unwrap_or(0));
        self.scopes.push(FileScope {
            id,
            filename,
            includes: Vec::new(),
        });
        id
    }

    /// Fold another physical file into an existing scope.
    ///
    /// Returns `false` if the scope does not exist.
    pub fn include(&mut self, scope: FileScopeId, filename: Filename) -> bool {
        match self.get_mut(scope) {
            Some(s) => {
                if !s.includes.contains(&filename) {
                    s.includes.push(filename);
                }
                true
            }
            None => false,
        }
    }

    /// Get a scope by id
    pub fn get(&self, id: FileScopeId) -> Option<&FileScope> {
        self.scopes.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: FileScopeId) -> Option<&mut FileScope> {
        self.scopes.iter_mut().find(|s| s.id == id)
    }

    /// Check whether a scope id exists in this arena
    pub fn contains(&self, id: FileScopeId) -> bool {
        self.get(id).is_some()
    }

    /// All scopes that physically cover `path` (absolute or relative form)
    pub fn scopes_of_path(&self, path: &str) -> Vec<FileScopeId> {
        self.scopes
            .iter()
            .filter(|s| s.covers(path))
            .map(|s| s.id)
            .collect()
    }

    /// Iterate over all scopes in creation order
    pub fn iter(&self) -> impl Iterator<Item = &FileScope> {
        self.scopes.iter()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
