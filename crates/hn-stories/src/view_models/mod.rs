//! View models
//!
//! Pre-computed display data derived from `AppState`, so views only draw.

pub mod search_bar_view_model;
pub mod story_list_view_model;

pub use search_bar_view_model::SearchBarViewModel;
pub use story_list_view_model::StoryListViewModel;

use crate::state::AppState;

pub const LOADING_MESSAGE: &str = "Loading ...";
pub const ERROR_MESSAGE: &str = "Something went wrong ...";

/// What the main area shows
#[derive(Debug, Clone)]
pub enum ContentViewModel {
    /// A fetch is in flight; the list is hidden
    Loading,
    List(StoryListViewModel),
}

/// Everything below the search bar
#[derive(Debug, Clone)]
pub struct StoriesScreenViewModel {
    /// Shown above the content whenever the last fetch failed
    pub error: Option<&'static str>,
    pub content: ContentViewModel,
}

impl StoriesScreenViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let error = state.stories.is_error.then_some(ERROR_MESSAGE);
        let content = if state.stories.is_loading {
            ContentViewModel::Loading
        } else {
            ContentViewModel::List(StoryListViewModel::new(
                &state.visible_stories(),
                state.list.selected,
                &state.theme,
            ))
        };

        Self { error, content }
    }
}
