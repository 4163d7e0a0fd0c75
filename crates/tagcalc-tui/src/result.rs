//! Result banner.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tagcalc_core::INVALID_EXPRESSION;

use crate::styles::ColorTheme;

/// Render the banner. Nothing is drawn for `None` (empty formula).
pub fn render_result(frame: &mut Frame, area: Rect, result: Option<&str>) {
    let Some(text) = result else {
        return;
    };
    let theme = ColorTheme::default();
    let style = if text == INVALID_EXPRESSION {
        theme.error_style()
    } else {
        theme.success_style()
    };
    let block = Block::default().borders(Borders::ALL).title(" Result ");
    frame.render_widget(
        Paragraph::new(Line::styled(text.to_string(), style)).block(block),
        area,
    );
}
