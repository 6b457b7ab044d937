use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_normal: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Hacker News orange
            accent_primary: tailwind::ORANGE.c500,
            accent_secondary: tailwind::ORANGE.c700,

            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SKY.c400,

            selected_bg: tailwind::ORANGE.c900,
            selected_fg: tailwind::SLATE.c50,

            table_header_bg: tailwind::SLATE.c800,
            table_header_fg: tailwind::SLATE.c200,
            table_row_fg: tailwind::SLATE.c200,
            table_row_bg_normal: tailwind::SLATE.c950,
            table_row_bg_alt: tailwind::SLATE.c900,
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }
}
