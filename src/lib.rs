//! # Pragma Inventory - declaration inventory for Solidity projects
//!
//! Takes the compilation units produced by an upstream source analyzer and
//! reports every top-level declaration together with the pragma version
//! constraints active in its file scope.
//!
//! Pragma Inventory provides:
//! - A serde model of compilation units, file scopes and pragma directives
//! - A vendored-code filter (`node_modules` and friends)
//! - Scope-identity based pragma resolution
//! - A deterministic, table-rendered report (human or JSON)

pub mod source;
pub mod scope;
pub mod declaration;
pub mod pragma;
pub mod unit;
pub mod project;
pub mod inventory;
pub mod output;
pub mod config;
pub mod ui;


// Re-exports for convenient access
pub use declaration::{Contract, Declaration, DeclarationKind};
pub use inventory::{generate_report, InventoryOptions, ReportMode, ReportRow, TraversalOrder};
pub use output::{PrettyTable, PrinterOutput};
pub use pragma::PragmaDirective;
pub use project::Project;
pub use scope::{FileScope, FileScopeId, ScopeArena};
pub use source::{Filename, SourceMapping};
pub use unit::CompilationUnit;

/// Result type alias for Pragma Inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Pragma Inventory operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Compilation unit `{unit}` references unknown file scope {scope}")]
    UnknownScope { unit: String, scope: FileScopeId },

    #[error("Unknown declaration kind: {0}")]
    InvalidKind(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}
