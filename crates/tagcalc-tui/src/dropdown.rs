//! Value dropdown drawn under an open chip.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use tagcalc_core::Chip;

use crate::styles::ColorTheme;

const MIN_WIDTH: u16 = 14;

/// Popup geometry and the rect of each visible option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownLayout {
    pub area: Rect,
    pub options: Vec<(Rect, usize)>,
}

fn option_label(value: &str, selected: bool) -> String {
    if selected {
        format!("\u{2713} {value}")
    } else {
        format!("  {value}")
    }
}

/// Render the dropdown for `chip` anchored below `anchor`, clipped to
/// `bounds`. `loading` is true while suggestions have not arrived.
pub fn render_dropdown(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    chip: &Chip,
    highlight: usize,
    loading: bool,
) -> DropdownLayout {
    let theme = ColorTheme::default();
    let labels: Vec<String> = chip
        .options
        .iter()
        .map(|o| option_label(&o.value, o.selected))
        .collect();

    let widest = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(10);
    let width = u16::try_from(widest + 2)
        .unwrap_or(u16::MAX)
        .max(anchor.width)
        .max(MIN_WIDTH);
    let rows = u16::try_from(labels.len().max(1)).unwrap_or(u16::MAX);
    let popup = Rect::new(
        anchor.x,
        anchor.y.saturating_add(1),
        width,
        rows.saturating_add(2),
    )
    .intersection(bounds);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", chip.name))
        .title_style(theme.header_style());
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);

    if loading || labels.is_empty() {
        let text = if loading { "Loading..." } else { "No values" };
        frame.render_widget(
            Paragraph::new(Line::styled(text, theme.muted_style())).block(block),
            popup,
        );
        return DropdownLayout {
            area: popup,
            options: Vec::new(),
        };
    }

    let visible = usize::from(inner.height);
    let highlight = highlight.min(labels.len() - 1);
    let offset = highlight.saturating_sub(visible.saturating_sub(1));

    let mut lines = Vec::with_capacity(visible);
    let mut options = Vec::with_capacity(visible);
    for (row, (index, label)) in labels.iter().enumerate().skip(offset).take(visible).enumerate() {
        let style = if index == highlight {
            theme.selected_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::styled(label.clone(), style));
        let y = inner.y + u16::try_from(row).unwrap_or(u16::MAX);
        options.push((Rect::new(inner.x, y, inner.width, 1), index));
    }
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    DropdownLayout {
        area: popup,
        options,
    }
}
