use tabled::{settings::Style, Table, Tabled};

/// Render rows as a rounded table.
///
/// Returns an empty string when there is nothing to show.
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}
