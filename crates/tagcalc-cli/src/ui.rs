//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A section header line.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    if color {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    } else {
        format!("=== {text} ===")
    }
}

/// Colour a result string: red for an invalid expression, green otherwise.
#[must_use]
pub fn styled_result(text: &str, invalid: bool, color: bool) -> String {
    match (color, invalid) {
        (false, _) => text.to_string(),
        (true, true) => style(text).red().bold().to_string(),
        (true, false) => style(text).green().bold().to_string(),
    }
}

pub fn print_header(text: &str) {
    println!("{}", header_line(text, !is_color_disabled()));
}

/// Print a warning to stderr.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
