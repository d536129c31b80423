//! Application Model
//!
//! The session state for one browsing session, organized into focused
//! sub-models:
//!
//! - **DirectoryModel**: loaded doctors and everything derived from them
//! - **FilterState**: the current selection (replaced, never mutated)
//! - **History**: canonical query strings, the stand-in for the address bar
//! - **UiModel**: focus, selections, search box, messages
//!
//! Every transition keeps three things in step: the filter state, the
//! visible list derived from it, and the history entry encoded from it.

pub mod directory;
pub mod filters;
pub mod history;
pub mod ui;

pub use directory::{DirectoryModel, LoadState};
pub use filters::{FilterState, PartialFilterState};
pub use history::History;
pub use ui::{Focus, UiModel};

use crate::api::Doctor;
use crate::logic::{self, panel::PanelRow, url};

/// How a filter change is recorded in history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// New entry (a distinct user action)
    Push,
    /// Overwrite the current entry (e.g. successive keystrokes)
    Replace,
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub directory: DirectoryModel,
    pub filters: FilterState,
    pub history: History,
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default filters and an empty history entry
    pub fn new(vim_mode: bool, max_suggestions: usize, base_url: String) -> Self {
        Self {
            directory: DirectoryModel::new(),
            filters: FilterState::default(),
            history: History::default(),
            ui: UiModel::new(vim_mode, max_suggestions, base_url),
        }
    }

    /// Replace the record set and recompute everything derived from it
    pub fn set_doctors(&mut self, doctors: Vec<Doctor>) {
        self.directory.specialties = logic::all_specialties(&doctors);
        self.directory.doctors = doctors;
        self.directory.load_state = LoadState::Loaded;
        self.refresh_visible();

        tracing::debug!(
            doctors = self.directory.doctors.len(),
            specialties = self.directory.specialties.len(),
            "record set loaded"
        );
    }

    pub fn set_load_error(&mut self, message: String) {
        self.directory.load_state = LoadState::Failed { message };
        self.directory.doctors.clear();
        self.directory.specialties.clear();
        self.refresh_visible();
    }

    /// Seed the session from an address (bare query or full URL)
    ///
    /// Fields present in the query are overlaid onto the current state; the
    /// current history entry is rewritten in canonical form.
    pub fn restore_from_query(&mut self, address: &str) {
        let partial = url::decode(url::split_query(address));
        self.filters = self.filters.overlay(&partial);
        self.history.replace(url::encode(&self.filters));
        self.refresh_visible();
    }

    /// Overlay a user change onto the filters and record it in history
    ///
    /// Returns false when the update leaves the filters unchanged.
    pub fn update_filters(&mut self, partial: &PartialFilterState, mode: HistoryMode) -> bool {
        let next = self.filters.overlay(partial);
        if next == self.filters {
            return false;
        }

        self.filters = next;
        let query = url::encode(&self.filters);
        match mode {
            HistoryMode::Push => {
                self.history.push(query);
            }
            HistoryMode::Replace => self.history.replace(query),
        }
        self.refresh_visible();
        true
    }

    /// Reset every filter to its default
    pub fn clear_filters(&mut self) -> bool {
        let reset = PartialFilterState {
            search: Some(String::new()),
            consultation_type: Some(None),
            specialties: Some(Vec::new()),
            sort_by: Some(None),
        };
        self.update_filters(&reset, HistoryMode::Push)
    }

    /// Step back through history; the entry is decoded over defaults
    pub fn navigate_back(&mut self) -> bool {
        let Some(query) = self.history.back().map(str::to_string) else {
            return false;
        };
        self.apply_history_entry(&query);
        true
    }

    /// Step forward through history; the entry is decoded over defaults
    pub fn navigate_forward(&mut self) -> bool {
        let Some(query) = self.history.forward().map(str::to_string) else {
            return false;
        };
        self.apply_history_entry(&query);
        true
    }

    fn apply_history_entry(&mut self, query: &str) {
        self.filters = FilterState::default().overlay(&url::decode(query));
        self.refresh_visible();
    }

    /// Recompute the visible list and keep the list selection in range
    pub fn refresh_visible(&mut self) {
        self.directory.visible = logic::apply(&self.directory.doctors, &self.filters);
        self.ui.list_selection =
            logic::ui::clamp_selection(self.ui.list_selection, self.directory.visible.len());
    }

    /// Autocomplete entries for the current search text
    pub fn suggestions(&self) -> Vec<Doctor> {
        logic::suggest(
            &self.directory.doctors,
            &self.filters.search,
            self.ui.max_suggestions,
        )
    }

    /// Current canonical query string
    pub fn current_query(&self) -> &str {
        self.history.current()
    }

    /// Full shareable link for the current filters
    pub fn shareable_url(&self) -> String {
        url::encode_url(&self.ui.base_url, &self.filters)
    }

    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.ui
            .list_selection
            .and_then(|idx| self.directory.visible.get(idx))
    }

    /// Rows of the filter panel for the current state
    pub fn panel_rows(&self) -> Vec<PanelRow> {
        logic::panel::panel_rows(
            &self.directory.specialties,
            &self.filters,
            &self.ui.sections,
        )
    }
}
