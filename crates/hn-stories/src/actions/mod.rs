//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic input actions (TextInput) that middleware translates into search actions
//! - Global actions that affect the entire application
//! - Domain actions that are already targeted to a particular reducer
//! - Events, which only middleware observes

pub mod bootstrap;
pub mod event;
pub mod global;
pub mod list;
pub mod search;
pub mod stories;
pub mod text_input;

pub use bootstrap::BootstrapAction;
pub use event::{Event, FetchOutcome};
pub use global::GlobalAction;
pub use list::ListAction;
pub use search::SearchAction;
pub use stories::StoriesAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts that re-enter the middleware chain and never reach reducers.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Generic text input - translated into search actions by middleware
    TextInput(TextInputAction),

    /// Global application actions
    Global(GlobalAction),

    /// Startup sequence
    Bootstrap(BootstrapAction),

    /// Search term and effective query
    Search(SearchAction),

    /// Fetched stories and their loading state
    Stories(StoriesAction),

    /// Cursor and per-item operations on the story list
    List(ListAction),
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
