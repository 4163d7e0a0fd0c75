//! Chip row: the formula reconstructed as text items and tag chips.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tagcalc_core::{FormulaView, ViewItem};

use crate::styles::ColorTheme;

/// Marker drawn on a chip's value control.
pub const DROPDOWN_MARKER: &str = "\u{25be}";

/// Spans for the view plus, per chip, the column range of its value control
/// relative to the line start.
fn layout_spans(view: &FormulaView) -> (Vec<Span<'static>>, Vec<(u16, u16, String)>) {
    let theme = ColorTheme::default();
    let mut spans = Vec::new();
    let mut controls = Vec::new();
    let mut x: usize = 0;

    for (i, item) in view.items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            x += 1;
        }
        match item {
            ViewItem::Text(text) => {
                let span = Span::styled(text.clone(), theme.text_style());
                x += span.width();
                spans.push(span);
            }
            ViewItem::Chip(chip) => {
                let name = Span::styled(format!(" {} ", chip.name), theme.chip_name_style());
                x += name.width();
                spans.push(name);

                let control = Span::styled(
                    format!(" {} {DROPDOWN_MARKER} ", chip.label()),
                    theme.chip_value_style(chip.value.is_some(), chip.open),
                );
                let start = x;
                x += control.width();
                spans.push(control);
                controls.push((
                    u16::try_from(start).unwrap_or(u16::MAX),
                    u16::try_from(x - start).unwrap_or(u16::MAX),
                    chip.dropdown_id.clone(),
                ));
            }
        }
    }
    (spans, controls)
}

/// Render the chip row. Returns the on-screen rect of each chip's value
/// control with its dropdown identifier.
pub fn render_chips(frame: &mut Frame, area: Rect, view: &FormulaView) -> Vec<(Rect, String)> {
    let theme = ColorTheme::default();
    let block = Block::default().borders(Borders::ALL).title(" Tags ");
    let inner = block.inner(area);

    if view.is_empty() {
        let line = Line::styled("no formula", theme.muted_style());
        frame.render_widget(Paragraph::new(line).block(block), area);
        return Vec::new();
    }

    let (spans, controls) = layout_spans(view);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    controls
        .into_iter()
        .filter(|(start, _, _)| *start < inner.width)
        .map(|(start, width, id)| {
            let x = inner.x + start;
            let width = width.min(inner.right() - x);
            (Rect::new(x, inner.y, width, 1.min(inner.height)), id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(view: &FormulaView, width: u16) -> (String, Vec<(Rect, String)>) {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        let mut toggles = Vec::new();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                toggles = render_chips(frame, area, view);
            })
            .unwrap();
        let row = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        (row, toggles)
    }

    #[test]
    fn renders_text_and_chips() {
        let mut values = HashMap::new();
        values.insert("basic_courses".to_string(), "3".to_string());
        let view = FormulaView::build("(basic_courses * 500)", &values, None, None);

        let (row, toggles) = draw(&view, 60);
        assert!(row.contains("basic_courses"));
        assert!(row.contains("3 \u{25be}"));
        assert!(row.contains("500"));
        assert_eq!(toggles.len(), 1);
        assert_eq!(toggles[0].1, "tag-2");
    }

    #[test]
    fn control_rect_covers_label() {
        let view = FormulaView::build("ab", &HashMap::new(), None, None);
        let (row, toggles) = draw(&view, 40);
        let rect = toggles[0].0;
        let covered: String = row
            .chars()
            .skip(usize::from(rect.x))
            .take(usize::from(rect.width))
            .collect();
        assert_eq!(covered.trim(), "Select \u{25be}");
    }

    #[test]
    fn chips_past_the_edge_are_not_clickable() {
        let formula = "alpha_long_name + beta_long_name + gamma_long_name";
        let view = FormulaView::build(formula, &HashMap::new(), None, None);
        let (_, toggles) = draw(&view, 30);
        assert!(toggles.len() < 3);
        assert!(toggles.iter().all(|(r, _)| r.right() <= 29));
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let (row, toggles) = draw(&FormulaView::default(), 30);
        assert!(row.contains("no formula"));
        assert!(toggles.is_empty());
    }
}
