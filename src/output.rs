//! Report emission - the object handed to the printing sink
//!
//! A report is a free-text description plus any number of named tables.
//! Tables keep their raw cells so the JSON form stays machine readable.

use crate::ui::render_table;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use tabled::Tabled;

static QUIET: OnceLock<bool> = OnceLock::new();

/// Suppress banner lines around the report (`PRAGMA_INVENTORY_QUIET=1`)
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("PRAGMA_INVENTORY_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

/// A rendered table that also keeps its cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrettyTable {
    pub field_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip)]
    rendered: String,
}

impl PrettyTable {
    pub fn from_rows<T: Tabled>(rows: &[T]) -> Self {
        Self {
            field_names: T::headers().into_iter().map(Cow::into_owned).collect(),
            rows: rows
                .iter()
                .map(|row| row.fields().into_iter().map(Cow::into_owned).collect())
                .collect(),
            rendered: render_table(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for PrettyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputElement {
    PrettyTable { name: String, content: PrettyTable },
}

/// Final report object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterOutput {
    pub description: String,
    pub elements: Vec<OutputElement>,
}

impl PrinterOutput {
    pub fn generate_output(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            elements: Vec::new(),
        }
    }

    pub fn add_pretty_table(&mut self, table: PrettyTable, name: impl Into<String>) {
        self.elements.push(OutputElement::PrettyTable {
            name: name.into(),
            content: table,
        });
    }

    /// Look up an attached table by name
    pub fn table(&self, name: &str) -> Option<&PrettyTable> {
        self.elements.iter().find_map(|e| match e {
            OutputElement::PrettyTable { name: n, content } if n == name => Some(content),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &PrettyTable> {
        self.elements.iter().map(|e| match e {
            OutputElement::PrettyTable { content, .. } => content,
        })
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
