//! Source locations - where a declaration lives on disk
//!
//! The upstream analyzer reports every physical file in two forms:
//! - `absolute`: the path as it was compiled (used for vendored-code checks)
//! - `relative`: the path relative to the project root (used for display)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical source file as reported by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filename {
    /// Path as compiled
    pub absolute: String,
    /// Path relative to the project root
    pub relative: String,
}

impl Filename {
    /// Create a new Filename
    pub fn new(absolute: impl Into<String>, relative: impl Into<String>) -> Self {
        Self {
            absolute: absolute.into(),
            relative: relative.into(),
        }
    }

    /// Display form of the path
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Check whether `path` names this file in either form
    pub fn matches(&self, path: &str) -> bool {
        self.absolute == path || self.relative == path
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative)
    }
}

/// Byte range of a declaration inside its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapping {
    pub filename: Filename,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub length: u32,
}

impl SourceMapping {
    /// Create a mapping covering `length` bytes starting at `start`
    pub fn new(filename: Filename, start: u32, length: u32) -> Self {
        Self {
            filename,
            start,
            length,
        }
    }

    /// Mapping that only records the file
    pub fn file(filename: Filename) -> Self {
        Self::new(filename, 0, 0)
    }
}

impl fmt::Display for SourceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}-{}", self.filename, self.start, self.start + self.length)
    }
}
