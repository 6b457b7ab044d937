//! Story list actions

/// Cursor movement and per-item operations on the visible story list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Open the selected story's url in the system browser
    OpenSelected,
}
