//! KeyboardMiddleware - translates key presses into actions
//!
//! The search input always has focus, so printable characters edit the
//! term. Everything else uses keys that cannot be typed:
//!
//! | Key                | Action                            |
//! |--------------------|-----------------------------------|
//! | Ctrl+C, Esc        | quit                              |
//! | Enter              | submit search                     |
//! | Backspace          | delete last character             |
//! | Ctrl+U             | clear the search term             |
//! | Up / Down          | move the cursor                   |
//! | Home / End         | jump to first / last story        |
//! | Delete, Ctrl+D     | dismiss the selected story        |
//! | Ctrl+O             | open the selected story's url     |

use crate::actions::{Action, GlobalAction, ListAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::story_list::StoryList;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key into an action, if it means anything
    fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            KeyCode::Char('c') if ctrl => Action::Global(GlobalAction::Quit),
            KeyCode::Esc => Action::Global(GlobalAction::Quit),

            KeyCode::Char('u') if ctrl => Action::TextInput(TextInputAction::ClearLine),
            KeyCode::Char('o') if ctrl => Action::List(ListAction::OpenSelected),
            KeyCode::Char('d') if ctrl => return Self::dismiss_selected(state),
            KeyCode::Delete => return Self::dismiss_selected(state),

            // Other Ctrl/Alt chords are not text
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                return None
            }
            KeyCode::Char(c) => Action::TextInput(TextInputAction::Char(c)),
            KeyCode::Backspace => Action::TextInput(TextInputAction::Backspace),
            KeyCode::Enter => Action::TextInput(TextInputAction::Confirm),

            KeyCode::Down => Action::List(ListAction::NavigateNext),
            KeyCode::Up => Action::List(ListAction::NavigatePrevious),
            KeyCode::Home => Action::List(ListAction::NavigateToTop),
            KeyCode::End => Action::List(ListAction::NavigateToBottom),

            _ => return None,
        };

        Some(action)
    }

    fn dismiss_selected(state: &AppState) -> Option<Action> {
        StoryList::from_state(state).remove_request(state.list.selected)
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(*key, state) {
            Some(translated) => {
                log::debug!("Key {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("Unbound key {:?}", key),
        }

        false
    }
}
