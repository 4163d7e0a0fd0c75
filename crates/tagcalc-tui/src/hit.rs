//! Pointer hit-testing against the regions drawn in the last frame.

use ratatui::layout::{Position, Rect};
use tagcalc_core::PointerTarget;

/// What a pointer-down landed on, with enough detail to activate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The input box; `column` is the character column under the pointer.
    Input { column: usize },
    /// A suggestion table row, by suggestion index.
    TableRow(usize),
    /// The table outside any row.
    Table,
    /// An option row inside the open dropdown.
    DropdownOption { dropdown_id: String, index: usize },
    /// The open dropdown outside any option.
    Dropdown(String),
    /// A chip's value control.
    Toggle(String),
    Elsewhere,
}

impl Hit {
    /// The region classification the editor uses for outside-click closing.
    #[must_use]
    pub fn target(&self) -> PointerTarget {
        match self {
            Self::Input { .. } => PointerTarget::Input,
            Self::TableRow(_) | Self::Table => PointerTarget::SuggestionTable,
            Self::DropdownOption { dropdown_id, .. } | Self::Dropdown(dropdown_id) => {
                PointerTarget::Dropdown(dropdown_id.clone())
            }
            Self::Toggle(id) => PointerTarget::DropdownToggle(id.clone()),
            Self::Elsewhere => PointerTarget::Elsewhere,
        }
    }
}

/// Bounding regions recorded while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    /// Input box including its border.
    pub input: Option<Rect>,
    /// Text area inside the input border.
    pub input_text: Option<Rect>,
    /// Characters scrolled off the left edge of the input.
    pub input_scroll: usize,
    pub table: Option<Rect>,
    pub table_rows: Vec<(Rect, usize)>,
    pub toggles: Vec<(Rect, String)>,
    pub dropdown: Option<(Rect, String)>,
    pub options: Vec<(Rect, usize)>,
}

impl HitRegions {
    /// Classify a pointer-down. The dropdown is drawn over everything else
    /// and is tested first.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);

        if let Some((area, id)) = &self.dropdown {
            if area.contains(pos) {
                return self
                    .options
                    .iter()
                    .find(|(r, _)| r.contains(pos))
                    .map_or_else(
                        || Hit::Dropdown(id.clone()),
                        |(_, index)| Hit::DropdownOption {
                            dropdown_id: id.clone(),
                            index: *index,
                        },
                    );
            }
        }

        if let Some((_, id)) = self.toggles.iter().find(|(r, _)| r.contains(pos)) {
            return Hit::Toggle(id.clone());
        }

        if self.input.is_some_and(|r| r.contains(pos)) {
            let column = self.input_text.map_or(0, |text| {
                usize::from(column.saturating_sub(text.x)).min(usize::from(text.width))
            });
            return Hit::Input {
                column: self.input_scroll + column,
            };
        }

        if self.table.is_some_and(|r| r.contains(pos)) {
            return self
                .table_rows
                .iter()
                .find(|(r, _)| r.contains(pos))
                .map_or(Hit::Table, |(_, index)| Hit::TableRow(*index));
        }

        Hit::Elsewhere
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> HitRegions {
        HitRegions {
            input: Some(Rect::new(0, 0, 40, 3)),
            input_text: Some(Rect::new(1, 1, 38, 1)),
            input_scroll: 0,
            table: Some(Rect::new(0, 10, 40, 6)),
            table_rows: vec![(Rect::new(1, 12, 38, 1), 0), (Rect::new(1, 13, 38, 1), 1)],
            toggles: vec![(Rect::new(5, 4, 10, 1), "tag-0".into())],
            dropdown: Some((Rect::new(5, 5, 12, 6), "tag-0".into())),
            options: vec![(Rect::new(6, 6, 10, 1), 0), (Rect::new(6, 7, 10, 1), 1)],
        }
    }

    #[test]
    fn dropdown_wins_over_table() {
        let r = regions();
        assert_eq!(
            r.hit(7, 7),
            Hit::DropdownOption {
                dropdown_id: "tag-0".into(),
                index: 1
            }
        );
        assert_eq!(r.hit(6, 10), Hit::Dropdown("tag-0".into()));
    }

    #[test]
    fn toggle_and_input() {
        let r = regions();
        assert_eq!(r.hit(6, 4), Hit::Toggle("tag-0".into()));
        assert_eq!(r.hit(4, 1), Hit::Input { column: 3 });
        assert_eq!(r.hit(0, 0), Hit::Input { column: 0 });
    }

    #[test]
    fn input_column_includes_scroll() {
        let mut r = regions();
        r.input_scroll = 10;
        assert_eq!(r.hit(3, 1), Hit::Input { column: 12 });
    }

    #[test]
    fn table_rows() {
        let r = regions();
        assert_eq!(r.hit(30, 13), Hit::TableRow(1));
        assert_eq!(r.hit(30, 11), Hit::Table);
        assert_eq!(r.hit(30, 20), Hit::Elsewhere);
    }

    #[test]
    fn targets() {
        assert_eq!(Hit::TableRow(2).target(), PointerTarget::SuggestionTable);
        assert_eq!(
            Hit::DropdownOption {
                dropdown_id: "tag-2".into(),
                index: 0
            }
            .target(),
            PointerTarget::Dropdown("tag-2".into())
        );
        assert_eq!(
            Hit::Toggle("tag-4".into()).target(),
            PointerTarget::DropdownToggle("tag-4".into())
        );
        assert_eq!(Hit::Elsewhere.target(), PointerTarget::Elsewhere);
    }
}
