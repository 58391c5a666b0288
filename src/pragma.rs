//! Pragma directives as produced by the analyzer
//!
//! A directive is kept as its token list, e.g. `pragma solidity ^0.8.0;`
//! arrives as `["solidity", "^", "0.8", ".0"]`. The constraint itself is
//! never parsed here; it is only matched to scopes and reported verbatim.

use crate::scope::FileScopeId;
use crate::source::SourceMapping;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PragmaDirective {
    pub directive: Vec<String>,
    /// Scope the directive was declared in
    pub scope: FileScopeId,
    #[serde(default)]
    pub source_mapping: Option<SourceMapping>,
}

impl PragmaDirective {
    pub fn new<I, S>(scope: FileScopeId, directive: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            directive: directive.into_iter().map(Into::into).collect(),
            scope,
            source_mapping: None,
        }
    }

    /// Shorthand for `pragma solidity <version>;`
    pub fn solidity(scope: FileScopeId, version: impl Into<String>) -> Self {
        Self::new(scope, ["solidity".to_string(), version.into()])
    }

    /// Pragma name (`solidity`, `experimental`, `abicoder`)
    pub fn name(&self) -> &str {
        self.directive.first().map(String::as_str).unwrap_or("")
    }

    pub fn is_solidity_version(&self) -> bool {
        self.name() == "solidity"
    }

    /// Version expression with the tokens glued back together
    pub fn version(&self) -> String {
        self.directive.iter().skip(1).map(String::as_str).collect()
    }

    pub fn is_abi_encoder_v2(&self) -> bool {
        match self.directive.as_slice() {
            [name, value] => {
                (name == "experimental" && value == "ABIEncoderV2")
                    || (name == "abicoder" && value == "v2")
            }
            _ => false,
        }
    }
}
