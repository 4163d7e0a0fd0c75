//! Constants shared by the formula model, the editor and the front ends.

use std::time::Duration;

/// Operator characters that split a formula into segments.
pub const OPERATORS: [char; 7] = ['+', '-', '*', '/', '^', '(', ')'];

/// Message shown in place of a result whenever evaluation fails.
pub const INVALID_EXPRESSION: &str = "Invalid expression";

/// Placeholder shown on a chip whose tag has no value yet.
pub const UNSELECTED_PLACEHOLDER: &str = "Select";

/// Default suggestion endpoint.
pub const DEFAULT_SUGGESTION_ENDPOINT: &str =
    "https://652f91320b8d8ddac0b2b62b.mockapi.io/autocomplete";

/// How long a fetched suggestion list stays fresh.
pub const SUGGESTION_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Prefix of chip dropdown identifiers (`tag-<segment index>`).
pub const DROPDOWN_ID_PREFIX: &str = "tag-";

/// Returns true if `c` is one of the formula operators.
#[inline]
#[must_use]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Returns true if `c` may appear inside a tag name.
///
/// Letters, digits, underscore and whitespace. Whitespace is allowed so that
/// names like `name 1` survive the flat text representation.
#[inline]
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The formula did not evaluate to a finite number.
    pub const ERROR_INVALID_EXPRESSION: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
