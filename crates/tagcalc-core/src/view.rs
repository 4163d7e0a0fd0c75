//! Derived chip view of a formula.
//!
//! The view is recomputed from the store after every mutation and never
//! mutated itself. Operators and numbers become plain text items; variables
//! become chips carrying their resolved value and the candidate values offered
//! by suggestions with the same name.

use std::collections::HashMap;

use crate::constants::UNSELECTED_PLACEHOLDER;
use crate::lexer::{tokenize, TokenKind};
use crate::suggestion::{matching, Suggestion};

/// One candidate value inside a chip dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipOption {
    pub suggestion_id: String,
    pub value: String,
    pub selected: bool,
}

/// A variable rendered as a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Segment index of the variable in the formula.
    pub index: usize,
    pub dropdown_id: String,
    pub name: String,
    /// Non-empty bound value, if any.
    pub value: Option<String>,
    pub open: bool,
    /// Candidate values; empty while suggestions are loading.
    pub options: Vec<ChipOption>,
}

impl Chip {
    /// Text shown on the chip's value control.
    #[must_use]
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or(UNSELECTED_PLACEHOLDER)
    }
}

/// An element of the rendered formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    /// Operator or numeric literal.
    Text(String),
    Chip(Chip),
}

/// The chip row for a formula.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaView {
    pub items: Vec<ViewItem>,
}

impl FormulaView {
    /// Build the view. `suggestions` is `None` while the fetch is pending.
    #[must_use]
    pub fn build(
        formula: &str,
        tag_values: &HashMap<String, String>,
        suggestions: Option<&[Suggestion]>,
        open_dropdown: Option<&str>,
    ) -> Self {
        let items = tokenize(formula)
            .into_iter()
            .map(|token| {
                let dropdown_id = token.dropdown_id();
                match token.kind {
                    TokenKind::Operator(op) => ViewItem::Text(op.to_string()),
                    TokenKind::Number(text) => ViewItem::Text(text),
                    TokenKind::Variable(name) => {
                        let dropdown_id = dropdown_id.unwrap_or_default();
                        let value = tag_values.get(&name).filter(|v| !v.is_empty()).cloned();
                        let options = suggestions
                            .map(|all| {
                                matching(all, &name)
                                    .map(|s| {
                                        let candidate = s.value_string();
                                        ChipOption {
                                            suggestion_id: s.id.clone(),
                                            selected: value.as_deref() == Some(candidate.as_str()),
                                            value: candidate,
                                        }
                                    })
                                    .collect()
                            })
                            .unwrap_or_default();
                        ViewItem::Chip(Chip {
                            index: token.index,
                            open: open_dropdown == Some(dropdown_id.as_str()),
                            dropdown_id,
                            name,
                            value,
                            options,
                        })
                    }
                }
            })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn chips(&self) -> impl Iterator<Item = &Chip> {
        self.items.iter().filter_map(|item| match item {
            ViewItem::Chip(chip) => Some(chip),
            ViewItem::Text(_) => None,
        })
    }

    #[must_use]
    pub fn chip(&self, dropdown_id: &str) -> Option<&Chip> {
        self.chips().find(|c| c.dropdown_id == dropdown_id)
    }

    /// The chip whose dropdown is open.
    #[must_use]
    pub fn open_chip(&self) -> Option<&Chip> {
        self.chips().find(|c| c.open)
    }
}
