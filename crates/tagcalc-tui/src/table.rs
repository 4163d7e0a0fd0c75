//! Free-text suggestion table.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;
use tagcalc_core::Suggestion;

use crate::styles::ColorTheme;

/// Table geometry and the rect of each visible row by suggestion index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub area: Rect,
    pub rows: Vec<(Rect, usize)>,
}

const WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(35),
    Constraint::Percentage(25),
    Constraint::Percentage(20),
    Constraint::Percentage(20),
];

/// Render the table. `suggestions` is `None` while loading.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    suggestions: Option<&[Suggestion]>,
    highlight: usize,
) -> TableLayout {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .title_style(theme.header_style());
    let inner = block.inner(area);

    let list = match suggestions {
        Some(list) if !list.is_empty() => list,
        other => {
            let text = if other.is_none() {
                "Loading suggestions..."
            } else {
                "No suggestions"
            };
            frame.render_widget(
                Paragraph::new(Line::styled(text, theme.muted_style())).block(block),
                area,
            );
            return TableLayout {
                area,
                rows: Vec::new(),
            };
        }
    };

    let visible = usize::from(inner.height.saturating_sub(1));
    let highlight = highlight.min(list.len() - 1);
    let offset = highlight.saturating_sub(visible.saturating_sub(1));

    let mut rows = Vec::with_capacity(visible);
    let mut regions = Vec::with_capacity(visible);
    for (line, (index, s)) in list.iter().enumerate().skip(offset).take(visible).enumerate() {
        let style = if index == highlight {
            theme.selected_style()
        } else {
            theme.text_style()
        };
        rows.push(
            Row::new(vec![
                s.name.clone(),
                s.category.clone(),
                s.value_string(),
                s.id.clone(),
            ])
            .style(style),
        );
        let y = inner.y + 1 + u16::try_from(line).unwrap_or(u16::MAX);
        regions.push((Rect::new(inner.x, y, inner.width, 1), index));
    }

    let header = Row::new(vec!["Name", "Category", "Value", "ID"]).style(theme.header_style());
    let table = Table::new(rows, WIDTHS).header(header).block(block);
    frame.render_widget(table, area);

    TableLayout {
        area,
        rows: regions,
    }
}
