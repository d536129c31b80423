//! Navigation History
//!
//! Stack of canonical query strings standing in for the browser address bar.
//! Each filter change pushes (or replaces) an entry; back/forward move the
//! cursor and hand back the query that should be decoded into a new state.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl History {
    /// Start a history with a single entry
    pub fn new(initial: String) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Query string of the current entry
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Append an entry, discarding anything forward of the cursor
    ///
    /// Returns false (and does nothing) when `query` equals the current entry.
    pub fn push(&mut self, query: String) -> bool {
        if self.current() == query {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query);
        self.cursor += 1;
        true
    }

    /// Overwrite the current entry in place
    ///
    /// When the new query equals the previous entry the current one is
    /// dropped instead, so no two adjacent entries are equal.
    pub fn replace(&mut self, query: String) {
        if self.cursor > 0 && self.entries[self.cursor - 1] == query {
            self.entries.remove(self.cursor);
            self.cursor -= 1;
        } else {
            self.entries[self.cursor] = query;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back; returns the now-current query, or None at the oldest entry
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward; returns the now-current query, or None at the newest entry
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// (1-based position, total entries) for the status bar
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_single_entry() {
        let history = History::new("search=raj".to_string());
        assert_eq!(history.current(), "search=raj");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
        assert_eq!(history.position(), (1, 1));
    }

    #[test]
    fn test_push_and_back_forward() {
        let mut history = History::default();
        assert!(history.push("a=1".to_string()));
        assert!(history.push("a=2".to_string()));

        assert_eq!(history.back(), Some("a=1"));
        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("a=1"));
        assert_eq!(history.forward(), Some("a=2"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_same_query_is_noop() {
        let mut history = History::new("x=1".to_string());
        assert!(!history.push("x=1".to_string()));
        assert_eq!(history.position(), (1, 1));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::default();
        history.push("a".to_string());
        history.push("b".to_string());
        history.back();
        history.push("c".to_string());

        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("a"));
        assert_eq!(history.position(), (2, 3));
    }

    #[test]
    fn test_replace_back_to_previous_collapses_entry() {
        let mut history = History::default();
        history.push("search=r".to_string());
        history.replace(String::new());
        assert_eq!(history.current(), "");
        assert_eq!(history.position(), (1, 1));
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut history = History::default();
        history.push("search=r".to_string());
        history.replace("search=ra".to_string());
        assert_eq!(history.current(), "search=ra");
        assert_eq!(history.position(), (2, 2));
    }
}
