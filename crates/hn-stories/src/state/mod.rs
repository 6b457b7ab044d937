//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod list;
mod search;
mod stories;

pub use app::AppState;
pub use list::ListState;
pub use search::SearchState;
pub use stories::{filter_by_title, StoriesState};
