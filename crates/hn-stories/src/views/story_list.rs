//! Story list
//!
//! Stateless: renders whatever sequence it is given and turns a removal
//! request for a row into the matching action.

use crate::actions::{Action, StoriesAction};
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::StoryListViewModel;
use hn_client::Story;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// The stories the list is showing, in display order
pub struct StoryList<'a> {
    stories: Vec<&'a Story>,
}

impl<'a> StoryList<'a> {
    pub fn new(stories: Vec<&'a Story>) -> Self {
        Self { stories }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(state.visible_stories())
    }

    /// The removal callback: dismiss the story shown at `index`
    pub fn remove_request(&self, index: usize) -> Option<Action> {
        self.stories
            .get(index)
            .map(|story| Action::Stories(StoriesAction::RemoveStory((*story).clone())))
    }
}

pub fn render(vm: &StoryListViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    if vm.rows.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(vm.empty_message, theme.muted())),
            area,
        );
        return;
    }

    let header = Row::new(["Title", "Author", "Comments", "Points"]).style(
        Style::default()
            .fg(theme.table_header_fg)
            .bg(theme.table_header_bg)
            .add_modifier(Modifier::BOLD),
    );

    let rows = vm.rows.iter().map(|row| {
        let title = Text::from(vec![
            Line::from(row.title.as_str()),
            Line::from(Span::styled(row.url.as_str(), theme.muted())),
        ]);
        Row::new(vec![
            Cell::from(title),
            Cell::from(row.author.as_str()),
            Cell::from(row.comments.as_str()),
            Cell::from(row.points.as_str()),
        ])
        .height(2)
        .style(Style::default().fg(row.fg_color).bg(row.bg_color))
    });

    let widths = [
        Constraint::Min(30),
        Constraint::Length(24),
        Constraint::Length(9),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .style(Style::default().fg(theme.text_secondary));

    let mut table_state = TableState::default().with_selected(Some(vm.selected_index));
    f.render_stateful_widget(table, area, &mut table_state);
}
