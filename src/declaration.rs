//! Declaration types - the top-level entities the inventory reports
//!
//! Every top-level Solidity entity maps to one of seven kinds:
//! - `Contract`, `Interface`, `Library`: contract-like, disambiguated by flags
//! - `Enum`, `Struct`: top-level type definitions
//! - `Event`, `Error`: top-level events and custom errors

use crate::scope::FileScopeId;
use crate::source::SourceMapping;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Report bucket of a declaration.
///
/// The declaration order of the variants is the order the report visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// Concrete or abstract contract (neither interface nor library)
    Contract,
    Interface,
    Library,
    Enum,
    Struct,
    Event,
    /// Custom error
    Error,
}

impl DeclarationKind {
    /// Get the display name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Contract => "Contract",
            DeclarationKind::Interface => "Interface",
            DeclarationKind::Library => "Library",
            DeclarationKind::Enum => "Enum",
            DeclarationKind::Struct => "Struct",
            DeclarationKind::Event => "Event",
            DeclarationKind::Error => "Error",
        }
    }

    /// Get all kinds, in report order
    pub fn all() -> &'static [DeclarationKind] {
        &[
            DeclarationKind::Contract,
            DeclarationKind::Interface,
            DeclarationKind::Library,
            DeclarationKind::Enum,
            DeclarationKind::Struct,
            DeclarationKind::Event,
            DeclarationKind::Error,
        ]
    }

    /// Check if this kind is carried by a `Contract` declaration
    pub fn is_contract_like(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Contract | DeclarationKind::Interface | DeclarationKind::Library
        )
    }
}

impl FromStr for DeclarationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "contract" => Ok(DeclarationKind::Contract),
            "interface" | "iface" => Ok(DeclarationKind::Interface),
            "library" | "lib" => Ok(DeclarationKind::Library),
            "enum" => Ok(DeclarationKind::Enum),
            "struct" | "structure" => Ok(DeclarationKind::Struct),
            "event" => Ok(DeclarationKind::Event),
            "error" | "custom-error" | "custom_error" => Ok(DeclarationKind::Error),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named top-level entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    /// Where the declaration was found, if the analyzer knows
    #[serde(default)]
    pub source_mapping: Option<SourceMapping>,
    /// File scope the declaration's pragmas are looked up in
    pub scope: FileScopeId,
}

impl Declaration {
    pub fn new(name: impl Into<String>, scope: FileScopeId) -> Self {
        Self {
            name: name.into(),
            source_mapping: None,
            scope,
        }
    }

    /// Set the source location
    pub fn with_source(mut self, mapping: SourceMapping) -> Self {
        self.source_mapping = Some(mapping);
        self
    }

    /// Path as compiled, if the location is known
    pub fn path(&self) -> Option<&str> {
        self.source_mapping
            .as_ref()
            .map(|m| m.filename.absolute.as_str())
    }

    /// Project-relative path, if the location is known
    pub fn relative_path(&self) -> Option<&str> {
        self.source_mapping.as_ref().map(|m| m.filename.relative())
    }
}

/// A contract-like declaration.
///
/// `is_interface` and `is_library` are independent flags from the analyzer;
/// `kind()` folds them into exactly one report bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(flatten)]
    pub declaration: Declaration,
    #[serde(default)]
    pub is_interface: bool,
    #[serde(default)]
    pub is_library: bool,
}

impl Contract {
    pub fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            is_interface: false,
            is_library: false,
        }
    }

    pub fn interface(declaration: Declaration) -> Self {
        Self {
            is_interface: true,
            ..Self::new(declaration)
        }
    }

    pub fn library(declaration: Declaration) -> Self {
        Self {
            is_library: true,
            ..Self::new(declaration)
        }
    }

    /// Report bucket. Interface wins over library, library over contract.
    pub fn kind(&self) -> DeclarationKind {
        if self.is_interface {
            DeclarationKind::Interface
        } else if self.is_library {
            DeclarationKind::Library
        } else {
            DeclarationKind::Contract
        }
    }
}
