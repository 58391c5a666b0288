//! Reporter - turns collected rows into the final report object

use super::collector::ReportRow;
use super::ReportMode;
use crate::output::{PrettyTable, PrinterOutput};
use tabled::Tabled;

pub const NONE_FOUND: &str =
    "No contracts, interfaces, libraries, enums, structs, events, or errors found in the project.\n";
pub const NO_INTERFACES_FOUND: &str = "No interfaces found in the project.\n";

pub const INVENTORY_TABLE: &str = "Declarations & Pragma Versions";
pub const INTERFACES_TABLE: &str = "Interfaces";

/// Row shape of the interfaces-only report
#[derive(Debug, Tabled)]
struct InterfaceRow<'a> {
    #[tabled(rename = "Interface Name")]
    name: &'a str,
    #[tabled(rename = "File")]
    file: &'a str,
    #[tabled(rename = "Pragma Version")]
    version_range: &'a str,
}

impl<'a> From<&'a ReportRow> for InterfaceRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            name: &row.name,
            file: &row.file,
            version_range: &row.version_range,
        }
    }
}

pub struct Reporter;

impl Reporter {
    /// Build the summary text and attach the table, rows kept in order
    pub fn render(rows: &[ReportRow], mode: ReportMode) -> PrinterOutput {
        if rows.is_empty() {
            let message = match mode {
                ReportMode::All => NONE_FOUND,
                ReportMode::InterfacesOnly => NO_INTERFACES_FOUND,
            };
            return PrinterOutput::generate_output(message);
        }

        let (table, name) = match mode {
            ReportMode::All => (PrettyTable::from_rows(rows), INVENTORY_TABLE),
            ReportMode::InterfacesOnly => {
                let rows: Vec<InterfaceRow<'_>> = rows.iter().map(InterfaceRow::from).collect();
                (PrettyTable::from_rows(&rows), INTERFACES_TABLE)
            }
        };

        let mut txt = format!("Found {} item(s):\n\n", rows.len());
        txt.push_str(&table.to_string());
        txt.push('\n');

        let mut output = PrinterOutput::generate_output(txt);
        output.add_pretty_table(table, name);
        output
    }
}
