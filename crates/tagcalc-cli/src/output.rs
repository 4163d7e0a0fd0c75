//! CLI output formatting.

use std::io::{self, Write};

use tagcalc_core::Suggestion;

const HEADERS: [&str; 4] = ["NAME", "CATEGORY", "VALUE", "ID"];

/// `name = value` pairs joined with commas, in the order given.
#[must_use]
pub fn format_bindings(bindings: &[(String, String)]) -> String {
    bindings
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text table of suggestions with left-aligned columns.
#[must_use]
pub fn format_suggestion_table(suggestions: &[Suggestion]) -> String {
    let rows: Vec<[String; 4]> = suggestions
        .iter()
        .map(|s| [s.name.clone(), s.category.clone(), s.value_string(), s.id.clone()])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(str::to_string);
    for row in std::iter::once(&header).chain(&rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Write the suggestion table.
pub fn write_suggestion_table(out: &mut dyn Write, suggestions: &[Suggestion]) -> io::Result<()> {
    out.write_all(format_suggestion_table(suggestions).as_bytes())
}
