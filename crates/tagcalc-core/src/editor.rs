//! Formula editor: text editing, caret management, suggestion selection and
//! dropdown state.
//!
//! `FormulaEditor` is the single owner of the [`FormulaStore`] and of the
//! transient UI state. Front ends translate their events into calls on it and
//! re-derive their view from [`FormulaEditor::view`] afterwards.
//!
//! Caret offsets are byte offsets into the input text and always sit on a
//! character boundary.

use crate::evaluator::result_banner;
use crate::lexer::{ends_with_operator, remove_last_segment, tokenize, trailing_word_run, Token};
use crate::store::FormulaStore;
use crate::suggestion::{matching, Suggestion};
use crate::view::FormulaView;

/// Where a pointer-down event landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// The text-entry box.
    Input,
    /// The free-text suggestion table.
    SuggestionTable,
    /// Inside the dropdown panel with this identifier.
    Dropdown(String),
    /// On the chip control that toggles this dropdown.
    DropdownToggle(String),
    /// Anywhere else.
    Elsewhere,
}

/// Editor state plus the store it mutates.
#[derive(Debug, Default)]
pub struct FormulaEditor {
    store: FormulaStore,
    input: String,
    caret: usize,
    table_open: bool,
    table_highlight: usize,
    open_dropdown: Option<String>,
    dropdown_highlight: usize,
}

impl FormulaEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor around an existing store. The visible input starts
    /// empty, as it does after a formula has been committed to chips.
    #[must_use]
    pub fn with_store(store: FormulaStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn store(&self) -> &FormulaStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FormulaStore {
        &mut self.store
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Caret position in characters, for display.
    #[must_use]
    pub fn caret_column(&self) -> usize {
        self.input[..self.caret].chars().count()
    }

    #[must_use]
    pub fn is_table_open(&self) -> bool {
        self.table_open
    }

    #[must_use]
    pub fn table_highlight(&self) -> usize {
        self.table_highlight
    }

    #[must_use]
    pub fn open_dropdown(&self) -> Option<&str> {
        self.open_dropdown.as_deref()
    }

    #[must_use]
    pub fn dropdown_highlight(&self) -> usize {
        self.dropdown_highlight
    }

    /// Load a formula into the store and the chip view, leaving the visible
    /// input empty.
    pub fn load_formula(&mut self, formula: impl Into<String>) {
        self.store.set_formula(formula);
        self.input.clear();
        self.caret = 0;
    }

    /// Derived chip view of the current formula.
    #[must_use]
    pub fn view(&self, suggestions: Option<&[Suggestion]>) -> FormulaView {
        FormulaView::build(
            self.store.formula(),
            self.store.tag_values(),
            suggestions,
            self.open_dropdown.as_deref(),
        )
    }

    /// Result banner text; `None` for an empty formula.
    #[must_use]
    pub fn result(&self) -> Option<String> {
        result_banner(self.store.formula(), self.store.tag_values())
    }

    // ------------------------------------------------------------------
    // Text editing
    // ------------------------------------------------------------------

    /// Store new input text and caret, mirror it into the formula and show the
    /// suggestion table.
    pub fn input_changed(&mut self, text: impl Into<String>, caret: usize) {
        self.input = text.into();
        self.caret = floor_boundary(&self.input, caret);
        tracing::debug!(input = %self.input, caret = self.caret, "input changed");
        self.table_open = true;
        self.table_highlight = 0;
        self.store.set_formula(self.input.clone());
    }

    pub fn insert_char(&mut self, c: char) {
        let mut text = self.input.clone();
        text.insert(self.caret, c);
        let caret = self.caret + c.len_utf8();
        self.input_changed(text, caret);
    }

    pub fn insert_str(&mut self, s: &str) {
        let mut text = self.input.clone();
        text.insert_str(self.caret, s);
        let caret = self.caret + s.len();
        self.input_changed(text, caret);
    }

    /// Delete-backward with tag-aware special cases.
    ///
    /// * Empty input, non-empty formula: drop the formula's last segment and
    ///   show the remainder as input.
    /// * Word run before the caret: delete the whole run and register it as a
    ///   tag with an empty value.
    /// * Otherwise delete one character.
    pub fn backspace(&mut self) {
        if self.input.is_empty() {
            if !self.store.formula().is_empty() {
                let formula = remove_last_segment(self.store.formula());
                tracing::debug!(formula = %formula, "removed trailing segment");
                self.store.set_formula(formula.clone());
                self.caret = formula.len();
                self.input = formula;
            }
            return;
        }

        let before = &self.input[..self.caret];
        if let Some(run) = trailing_word_run(before) {
            let start = self.caret - run.len();
            let tag = run.to_string();
            let text = format!("{}{}", &self.input[..start], &self.input[self.caret..]);
            tracing::debug!(tag = %tag, "deleted word run");
            self.input = text;
            self.caret = start;
            self.store.set_formula(self.input.clone());
            self.store.set_tag_value(tag, "");
        } else if let Some(prev) = before.chars().next_back() {
            let start = self.caret - prev.len_utf8();
            let mut text = self.input.clone();
            text.replace_range(start..self.caret, "");
            self.input_changed(text, start);
        }
    }

    /// Delete the character after the caret.
    pub fn delete_forward(&mut self) {
        if let Some(next) = self.input[self.caret..].chars().next() {
            let mut text = self.input.clone();
            text.replace_range(self.caret..self.caret + next.len_utf8(), "");
            let caret = self.caret;
            self.input_changed(text, caret);
        }
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = floor_boundary(&self.input, caret);
    }

    /// Place the caret at a character column.
    pub fn set_caret_column(&mut self, column: usize) {
        self.caret = self
            .input
            .char_indices()
            .nth(column)
            .map_or(self.input.len(), |(i, _)| i);
    }

    pub fn caret_left(&mut self) {
        if let Some(prev) = self.input[..self.caret].chars().next_back() {
            self.caret -= prev.len_utf8();
        }
    }

    pub fn caret_right(&mut self) {
        if let Some(next) = self.input[self.caret..].chars().next() {
            self.caret += next.len_utf8();
        }
    }

    pub fn caret_home(&mut self) {
        self.caret = 0;
    }

    pub fn caret_end(&mut self) {
        self.caret = self.input.len();
    }

    // ------------------------------------------------------------------
    // Suggestion table
    // ------------------------------------------------------------------

    /// Close the suggestion table. Tag dropdowns are unaffected.
    pub fn escape(&mut self) {
        self.table_open = false;
    }

    /// Pick the highlighted table row (the first unless the user moved the
    /// highlight) when the table is open and non-empty.
    pub fn enter(&mut self, suggestions: &[Suggestion]) {
        if !self.table_open || suggestions.is_empty() {
            return;
        }
        let row = self.table_highlight.min(suggestions.len() - 1);
        self.select_suggestion(&suggestions[row]);
    }

    pub fn highlight_next_row(&mut self, rows: usize) {
        if rows > 0 {
            self.table_highlight = (self.table_highlight + 1).min(rows - 1);
        }
    }

    pub fn highlight_prev_row(&mut self) {
        self.table_highlight = self.table_highlight.saturating_sub(1);
    }

    /// Apply a suggestion from the free-text table at the caret.
    ///
    /// After an operator (or at the very start) the name is inserted;
    /// otherwise it replaces the word run before the caret. The suggestion's
    /// value is bound to its name and the table closes.
    pub fn select_suggestion(&mut self, suggestion: &Suggestion) {
        tracing::debug!(id = %suggestion.id, name = %suggestion.name, "suggestion selected");
        let name = suggestion.name.as_str();
        let before = &self.input[..self.caret];
        let after = &self.input[self.caret..];

        let replace_from = if before.is_empty() || ends_with_operator(before) {
            Some(self.caret)
        } else {
            trailing_word_run(before).map(|run| self.caret - run.len())
        };

        if let Some(start) = replace_from {
            let text = format!("{}{name}{after}", &self.input[..start]);
            self.input = text;
            self.caret = start + name.len();
            self.store.set_formula(self.input.clone());
            self.store
                .set_tag_value(name.to_string(), suggestion.value_string());
        }
        self.table_open = false;
    }

    // ------------------------------------------------------------------
    // Tag dropdowns
    // ------------------------------------------------------------------

    /// Open the dropdown, or close it if it is the one already open. Opening a
    /// dropdown closes any other.
    pub fn toggle_dropdown(&mut self, dropdown_id: &str) {
        if self.open_dropdown.as_deref() == Some(dropdown_id) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(dropdown_id.to_string());
            self.dropdown_highlight = 0;
        }
    }

    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    /// Open the next (or previous) chip's dropdown in formula order. Moving
    /// past the last chip closes the dropdown.
    pub fn cycle_dropdown(&mut self, forward: bool) {
        let ids: Vec<String> = tokenize(self.store.formula())
            .iter()
            .filter_map(Token::dropdown_id)
            .collect();
        if ids.is_empty() {
            self.open_dropdown = None;
            return;
        }
        let current = self
            .open_dropdown
            .as_ref()
            .and_then(|open| ids.iter().position(|id| id == open));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(ids.len() - 1),
            (Some(i), true) => (i + 1 < ids.len()).then_some(i + 1),
            (Some(i), false) => i.checked_sub(1),
        };
        self.open_dropdown = next.map(|i| ids[i].clone());
        self.dropdown_highlight = 0;
    }

    /// Bind `value` to `tag` from a chip dropdown and close it. The formula
    /// text is unchanged.
    pub fn select_tag_value(&mut self, tag: &str, value: &str) {
        tracing::debug!(tag, value, "tag value selected");
        self.store.set_tag_value(tag.to_string(), value.to_string());
        self.open_dropdown = None;
    }

    pub fn highlight_next_option(&mut self, options: usize) {
        if options > 0 {
            self.dropdown_highlight = (self.dropdown_highlight + 1).min(options - 1);
        }
    }

    pub fn highlight_prev_option(&mut self) {
        self.dropdown_highlight = self.dropdown_highlight.saturating_sub(1);
    }

    /// Pick the highlighted option of the open dropdown.
    pub fn select_highlighted_option(&mut self, suggestions: &[Suggestion]) {
        let view = self.view(Some(suggestions));
        let Some(chip) = view.open_chip() else {
            return;
        };
        let Some(option) = chip.options.get(self.dropdown_highlight) else {
            return;
        };
        let (tag, value) = (chip.name.clone(), option.value.clone());
        self.select_tag_value(&tag, &value);
    }

    /// Close whatever the pointer-down landed outside of.
    pub fn pointer_down(&mut self, target: &PointerTarget) {
        if self.table_open
            && !matches!(target, PointerTarget::Input | PointerTarget::SuggestionTable)
        {
            self.table_open = false;
        }

        if let Some(open) = self.open_dropdown.as_deref() {
            let inside = match target {
                PointerTarget::Dropdown(id) | PointerTarget::DropdownToggle(id) => id == open,
                _ => false,
            };
            if !inside {
                self.open_dropdown = None;
            }
        }
    }

    /// Options offered for `tag`, in suggestion order.
    #[must_use]
    pub fn options_for<'a>(&self, tag: &'a str, suggestions: &'a [Suggestion]) -> Vec<&'a Suggestion> {
        matching(suggestions, tag).collect()
    }
}

fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
