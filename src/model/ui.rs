//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! focus, selections, the search input, and transient messages.

use std::time::Instant;

use crate::logic::panel::SectionVisibility;

/// Which pane receives navigation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Search,
    Filters,
    List,
}

impl Focus {
    /// Tab order: Search → Filters → List → Search
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Filters,
            Focus::Filters => Focus::List,
            Focus::List => Focus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::List,
            Focus::Filters => Focus::Search,
            Focus::List => Focus::Filters,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Maximum number of autocomplete suggestions
    pub max_suggestions: usize,

    /// Base URL used when showing the shareable link
    pub base_url: String,

    // ============================================
    // FOCUS & SELECTION
    // ============================================
    pub focus: Focus,

    /// Selected doctor in the visible list
    pub list_selection: Option<usize>,

    /// Cursor row in the filter panel
    pub panel_cursor: usize,

    /// Folded/unfolded filter panel sections
    pub sections: SectionVisibility,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether keystrokes currently go into the search box
    pub search_input_active: bool,

    /// Whether the suggestion dropdown is open
    pub suggestions_open: bool,

    /// Highlighted suggestion, if the user moved into the dropdown
    pub suggestion_selection: Option<usize>,

    /// Set once the current typing session has pushed a history entry;
    /// later keystrokes in the same session replace it
    pub search_entry_pushed: bool,

    // ============================================
    // MESSAGES
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, max_suggestions: usize, base_url: String) -> Self {
        Self {
            vim_mode,
            max_suggestions,
            base_url,
            focus: Focus::List,
            list_selection: None,
            panel_cursor: 0,
            sections: SectionVisibility::default(),
            search_input_active: false,
            suggestions_open: false,
            suggestion_selection: None,
            search_entry_pushed: false,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// Enter typing mode in the search box
    pub fn begin_search_input(&mut self) {
        self.focus = Focus::Search;
        self.search_input_active = true;
        self.suggestions_open = true;
        self.suggestion_selection = None;
        self.search_entry_pushed = false;
    }

    /// Leave typing mode and close the dropdown
    pub fn end_search_input(&mut self) {
        self.search_input_active = false;
        self.suggestions_open = false;
        self.suggestion_selection = None;
        self.search_entry_pushed = false;
    }
}
