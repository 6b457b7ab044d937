//! Application State

use hn_client::Story;
use hn_stories_config::{AppConfig, FetchMode};

use super::{filter_by_title, ListState, SearchState, StoriesState};
use crate::theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub search: SearchState,
    pub stories: StoriesState,
    pub list: ListState,
    pub theme: Theme,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            search: SearchState::default(),
            stories: StoriesState::default(),
            list: ListState::default(),
            theme: Theme::default(),
            config,
        }
    }

    /// Stories as the list shows them
    ///
    /// The remote API already filters by the query. The local backend
    /// serves everything, so the current term filters titles here.
    pub fn visible_stories(&self) -> Vec<&Story> {
        match self.config.fetch_mode {
            FetchMode::Remote => self.stories.data.iter().collect(),
            FetchMode::Local => filter_by_title(&self.stories.data, &self.search.term),
        }
    }

    /// The story under the cursor, if any
    pub fn selected_story(&self) -> Option<&Story> {
        self.visible_stories().get(self.list.selected).copied()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
