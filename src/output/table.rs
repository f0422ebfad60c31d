//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, Width, object::Rows},
};

/// Widest a table gets before cells wrap
const MAX_TABLE_WIDTH: usize = 120;

/// Format rows as a rounded table, or `empty` when there are none
pub fn format_table<T: Tabled>(rows: &[T], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Width::wrap(MAX_TABLE_WIDTH));

    table.to_string()
}
