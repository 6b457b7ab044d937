/// Story list cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Index into the visible stories
    pub selected: usize,
}
