//! TUI styles and color theme.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the widget.
pub struct ColorTheme {
    pub primary: Color,
    pub chip: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            chip: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Gray,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Tag name part of a chip.
    #[must_use]
    pub fn chip_name_style(&self) -> Style {
        Style::default().fg(Color::White).bg(self.chip)
    }

    /// Value control of a chip; unbound chips are dimmed.
    #[must_use]
    pub fn chip_value_style(&self, bound: bool, open: bool) -> Style {
        let style = if bound {
            Style::default().fg(Color::Black).bg(self.primary)
        } else {
            Style::default().fg(self.muted).bg(self.highlight)
        };
        if open {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
