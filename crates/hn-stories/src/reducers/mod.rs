pub mod list_reducer;
pub mod search_reducer;
pub mod stories_reducer;
