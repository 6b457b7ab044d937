//! Text input actions
//!
//! Generic edits of the search input, translated by the search middleware.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Enter pressed - submit the search
    Confirm,
}

impl TextInputAction {
    /// Apply an edit to `term`; `None` for actions that do not edit
    pub fn apply(&self, term: &str) -> Option<String> {
        match self {
            Self::Char(c) => {
                let mut next = term.to_string();
                next.push(*c);
                Some(next)
            }
            Self::Backspace => {
                let mut next = term.to_string();
                next.pop();
                Some(next)
            }
            Self::ClearLine => Some(String::new()),
            Self::Confirm => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_edits() {
        assert_eq!(TextInputAction::Char('s').apply("rus").as_deref(), Some("russ"));
        assert_eq!(TextInputAction::Backspace.apply("rust").as_deref(), Some("rus"));
        assert_eq!(TextInputAction::Backspace.apply("").as_deref(), Some(""));
        assert_eq!(TextInputAction::ClearLine.apply("rust").as_deref(), Some(""));
        assert_eq!(TextInputAction::Confirm.apply("rust"), None);
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        assert_eq!(TextInputAction::Backspace.apply("café").as_deref(), Some("caf"));
    }
}
