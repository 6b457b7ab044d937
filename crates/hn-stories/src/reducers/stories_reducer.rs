//! Stories Reducer
//!
//! Handles the fetch lifecycle and story dismissal using tagged StoriesAction.

use crate::actions::StoriesAction;
use crate::state::StoriesState;

/// Reduce story state based on actions
///
/// Pure: no I/O, no panics. Accepts only StoriesAction, so every transition
/// is spelled out below and a new action kind fails to compile until it is.
pub fn reduce(mut state: StoriesState, action: &StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }

        StoriesAction::FetchSuccess(stories) => {
            state.is_loading = false;
            state.is_error = false;
            state.data = stories.clone();
            log::info!("Loaded {} stories", stories.len());
        }

        StoriesAction::FetchFailure => {
            // Previous data stays visible
            state.is_loading = false;
            state.is_error = true;
        }

        StoriesAction::RemoveStory(story) => {
            let before = state.data.len();
            state.data.retain(|s| s.object_id != story.object_id);
            log::debug!(
                "Removed {} stories with id {}",
                before - state.data.len(),
                story.object_id
            );
        }
    }

    state
}
