//! # tagcalc-core
//!
//! Core library for the tagcalc formula widget: the formula store, the lexer,
//! the editor state machine, the derived chip view and the safe evaluator.

pub mod arith;
pub mod constants;
pub mod currency;
pub mod editor;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod store;
pub mod suggestion;
pub mod view;

// Re-exports
pub use constants::{exit_codes, INVALID_EXPRESSION, OPERATORS, SUGGESTION_FRESHNESS};
pub use editor::{FormulaEditor, PointerTarget};
pub use error::EvalError;
pub use evaluator::{calculate_result, evaluate, result_banner};
pub use lexer::{tokenize, Token, TokenKind};
pub use store::{FormulaStore, StoreEvent, StoreObserver, SubscriptionId};
pub use suggestion::{Suggestion, SuggestionValue};
pub use view::{Chip, ChipOption, FormulaView, ViewItem};

/// Evaluate a formula whose tags are given as `(name, value)` pairs.
///
/// This is a convenience function for simple use cases; interactive front
/// ends go through [`FormulaEditor`].
///
/// # Example
/// ```
/// let result = tagcalc_core::quick_eval("(basic_courses * 500)", &[("basic_courses", "3")]);
/// assert_eq!(result, "$1,500.00");
/// assert_eq!(tagcalc_core::quick_eval("4/0", &[]), "Invalid expression");
/// ```
#[must_use]
pub fn quick_eval(formula: &str, tags: &[(&str, &str)]) -> String {
    let tag_values = tags
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    calculate_result(formula, &tag_values)
}
