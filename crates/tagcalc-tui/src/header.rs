//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header with the suggestion status.
pub fn render_header(frame: &mut Frame, area: Rect, suggestions: Option<usize>) {
    let theme = ColorTheme::default();
    let status = match suggestions {
        None => Span::styled(" | loading suggestions...", theme.muted_style()),
        Some(n) => Span::raw(format!(" | {n} suggestions")),
    };
    let text = vec![Line::from(vec![
        Span::styled("tagcalc", theme.header_style()),
        status,
    ])];

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row_text(suggestions: Option<usize>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, suggestions);
            })
            .unwrap();
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_loading_then_count() {
        assert!(row_text(None).contains("loading suggestions"));
        assert!(row_text(Some(12)).contains("12 suggestions"));
    }
}
