//! Fetched stories and their loading state

use hn_client::Story;

/// The `{data, is_loading, is_error}` triple
///
/// Only the stories reducer changes it. `data` survives refetches and
/// failures; `is_loading` and `is_error` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Keep stories whose title contains `term`, ignoring case
pub fn filter_by_title<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_title_ignores_case() {
        let stories = vec![Story::new("0", "React"), Story::new("1", "Redux")];
        let hits = filter_by_title(&stories, "rEa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].object_id, "0");
    }

    #[test]
    fn test_filter_by_empty_term_keeps_all() {
        let stories = vec![Story::new("0", "React"), Story::new("1", "Redux")];
        assert_eq!(filter_by_title(&stories, "").len(), 2);
    }
}
