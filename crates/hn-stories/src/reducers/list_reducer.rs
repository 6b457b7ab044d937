//! List Reducer
//!
//! Moves the cursor over the visible stories. Needs the visible count,
//! which depends on more than the list state itself.

use crate::actions::ListAction;
use crate::state::ListState;

pub fn reduce(mut state: ListState, action: &ListAction, visible: usize) -> ListState {
    match action {
        ListAction::NavigateNext => {
            if visible > 0 {
                state.selected = (state.selected + 1) % visible;
            }
        }

        ListAction::NavigatePrevious => {
            if visible > 0 {
                state.selected = if state.selected == 0 {
                    visible - 1
                } else {
                    state.selected - 1
                };
            }
        }

        ListAction::NavigateToTop => {
            state.selected = 0;
        }

        ListAction::NavigateToBottom => {
            state.selected = visible.saturating_sub(1);
        }

        // Side effect only - handled by middleware
        ListAction::OpenSelected => {}
    }

    state
}

/// Keep the cursor on an existing row after the list shrank
pub fn clamp(mut state: ListState, visible: usize) -> ListState {
    state.selected = state.selected.min(visible.saturating_sub(1));
    state
}
