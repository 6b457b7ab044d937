//! Views
//!
//! The root composition: title, search bar, status line, story list, key hints.

use crate::state::AppState;
use crate::view_models::{ContentViewModel, SearchBarViewModel, StoriesScreenViewModel, LOADING_MESSAGE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub mod search_bar;
pub mod story_list;

const TITLE: &str = "My Hacker Stories";

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    f.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Search input + effective query
            Constraint::Length(1), // Error line
            Constraint::Min(0),    // Stories
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    f.render_widget(Paragraph::new(Span::styled(TITLE, theme.title())), chunks[0]);

    let search_vm = SearchBarViewModel::from_state(state);
    search_bar::render(&search_vm, theme, chunks[1], f);

    let screen_vm = StoriesScreenViewModel::from_state(state);
    if let Some(error) = screen_vm.error {
        f.render_widget(Paragraph::new(Span::styled(error, theme.error())), chunks[2]);
    }

    match &screen_vm.content {
        ContentViewModel::Loading => {
            let loading = Paragraph::new(Span::styled(
                LOADING_MESSAGE,
                Style::default().fg(theme.status_info),
            ));
            f.render_widget(loading, chunks[3]);
        }
        ContentViewModel::List(list_vm) => {
            story_list::render(list_vm, theme, chunks[3], f);
        }
    }

    render_key_hints(state, chunks[4], f);
}

fn render_key_hints(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let hints = [
        ("Enter", "search"),
        ("↑↓", "select"),
        ("Del", "dismiss"),
        ("^O", "open"),
        ("Esc", "quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key} "), theme.key_hint()),
                Span::styled(format!("{label} "), theme.muted()),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_secondary)),
        area,
    );
}
