//! Search input with the effective query underneath

use crate::theme::Theme;
use crate::view_models::SearchBarViewModel;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(vm: &SearchBarViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let border_color = if vm.pending {
        theme.status_warning
    } else {
        theme.accent_secondary
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(vm.hint, theme.title()));

    let lines = vec![
        Line::from(Span::styled(
            vm.term.as_str(),
            Style::default().fg(theme.text_primary),
        )),
        Line::from(Span::styled(vm.query_text.as_str(), theme.muted())),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);

    // The input always has focus
    let cursor_x = area.x + 1 + vm.term.chars().count() as u16;
    if cursor_x < area.right().saturating_sub(1) {
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}
