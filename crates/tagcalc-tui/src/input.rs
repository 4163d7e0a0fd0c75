//! Text-entry box.

use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Where the input text landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLayout {
    pub text: Rect,
    /// Characters hidden to the left so the caret stays visible.
    pub scroll: usize,
}

/// Horizontal scroll that keeps `caret_column` inside `width` cells.
#[must_use]
pub fn scroll_for(caret_column: usize, width: u16) -> usize {
    caret_column.saturating_sub(usize::from(width).saturating_sub(1))
}

/// Render the input box and place the terminal cursor at the caret.
pub fn render_input(frame: &mut Frame, area: Rect, text: &str, caret_column: usize) -> InputLayout {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Enter formula ")
        .title_style(theme.header_style());
    let inner = block.inner(area);
    let scroll = scroll_for(caret_column, inner.width);

    let visible: String = text.chars().skip(scroll).collect();
    let line = if text.is_empty() {
        Line::styled("e.g. (basic_courses * 500)", theme.muted_style())
    } else {
        Line::styled(visible, theme.text_style())
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let offset = u16::try_from(caret_column - scroll).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            inner.x + offset.min(inner.width - 1),
            inner.y,
        ));
    }

    InputLayout {
        text: inner,
        scroll,
    }
}
