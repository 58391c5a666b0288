//! File scopes - the unit pragma directives apply to
//!
//! A pragma is written in one file but applies to a *scope*: the file plus
//! anything the analyzer folded into it. Two physical files may share one
//! scope, so scopes are compared by identity and never rebuilt from paths.

pub mod arena;

pub use arena::{FileScope, FileScopeId, ScopeArena};
