//! View model for the story list
//!
//! Separates presentation logic from domain models and view rendering.

use crate::theme::Theme;
use hn_client::Story;
use ratatui::style::Color;

/// View model for the entire story list
#[derive(Debug, Clone)]
pub struct StoryListViewModel {
    /// Pre-computed rows ready to display, in story order
    pub rows: Vec<StoryRowViewModel>,
    /// Current cursor position
    pub selected_index: usize,
    /// Shown instead of the table when there are no rows
    pub empty_message: &'static str,
}

/// View model for a single story row
#[derive(Debug, Clone)]
pub struct StoryRowViewModel {
    pub title: String,
    pub url: String,
    pub author: String,
    pub comments: String,
    pub points: String,

    pub bg_color: Color,
    pub fg_color: Color,
}

impl StoryListViewModel {
    pub fn new(stories: &[&Story], selected: usize, theme: &Theme) -> Self {
        let rows = stories
            .iter()
            .enumerate()
            .map(|(index, story)| Self::build_row(story, index, selected, theme))
            .collect();

        Self {
            rows,
            selected_index: selected,
            empty_message: "No stories",
        }
    }

    fn build_row(story: &Story, index: usize, selected: usize, theme: &Theme) -> StoryRowViewModel {
        let (bg_color, fg_color) = if index == selected {
            (theme.selected_bg, theme.selected_fg)
        } else if index % 2 == 0 {
            (theme.table_row_bg_normal, theme.table_row_fg)
        } else {
            (theme.table_row_bg_alt, theme.table_row_fg)
        };

        let title = if story.title.is_empty() {
            "(untitled)".to_string()
        } else {
            story.title.clone()
        };

        StoryRowViewModel {
            title,
            url: story.url.clone(),
            author: story.author.clone(),
            comments: story.num_comments.to_string(),
            points: story.points.to_string(),
            bg_color,
            fg_color,
        }
    }
}
