use crate::actions::{Action, GlobalAction};
use crate::reducers::{list_reducer, search_reducer, stories_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Search(search_action) => {
            state.search = search_reducer::reduce(state.search, search_action);
        }
        Action::Stories(stories_action) => {
            state.stories = stories_reducer::reduce(state.stories, stories_action);
        }
        Action::List(list_action) => {
            let visible = state.visible_stories().len();
            state.list = list_reducer::reduce(state.list, list_action, visible);
        }
        // Consumed by middleware; nothing to reduce
        Action::Global(GlobalAction::KeyPressed(_))
        | Action::TextInput(_)
        | Action::Bootstrap(_)
        | Action::Event(_) => {}
    }

    // Removals, new results and filter changes can shrink the visible list
    let visible = state.visible_stories().len();
    state.list = list_reducer::clamp(state.list, visible);

    state
}
