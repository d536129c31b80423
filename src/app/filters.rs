//! Filter orchestration methods
//!
//! Every filter change goes through `update_filters`, which overlays the
//! change, recomputes the visible list and records the new canonical query.
//! Search typing is the exception to one-entry-per-action: the first
//! keystroke of a typing session pushes, later ones replace.

use docfinder::logic::panel::{self, PanelAction};
use docfinder::logic;
use docfinder::model::{HistoryMode, PartialFilterState};

use crate::App;

impl App {
    pub(crate) fn update_filters(&mut self, partial: &PartialFilterState, mode: HistoryMode) {
        if self.model.update_filters(partial, mode) {
            tracing::debug!(
                query = %self.model.current_query(),
                visible = self.model.directory.visible.len(),
                ?mode,
                "filters updated"
            );
        }
    }

    /// Replace the search text from the search box
    pub(crate) fn set_search_text(&mut self, text: String) {
        let mode = if self.model.ui.search_entry_pushed {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };
        let (before, _) = self.model.history.position();
        self.update_filters(&PartialFilterState::search(text), mode);
        let (after, _) = self.model.history.position();
        if after > before {
            self.model.ui.search_entry_pushed = true;
        } else if after < before {
            // Typing returned to the pre-session query and the entry collapsed
            self.model.ui.search_entry_pushed = false;
        }

        self.model.ui.suggestions_open = true;
        self.model.ui.suggestion_selection = None;
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        let mut text = self.model.filters.search.clone();
        text.push(c);
        self.set_search_text(text);
    }

    pub(crate) fn pop_search_char(&mut self) {
        let mut text = self.model.filters.search.clone();
        if text.pop().is_some() {
            self.set_search_text(text);
        }
    }

    /// Move the highlight within the suggestion dropdown
    pub(crate) fn move_suggestion(&mut self, delta: isize) {
        let count = self.model.suggestions().len();
        if count == 0 {
            self.model.ui.suggestion_selection = None;
            return;
        }
        self.model.ui.suggestion_selection = match self.model.ui.suggestion_selection {
            None if delta > 0 => Some(0),
            None => None,
            Some(0) if delta < 0 => None,
            current => logic::ui::move_selection(current, count, delta),
        };
    }

    /// Enter in the search box: take the highlighted suggestion, if any
    pub(crate) fn accept_search(&mut self) {
        if let Some(idx) = self.model.ui.suggestion_selection {
            if let Some(doctor) = self.model.suggestions().get(idx) {
                let name = doctor.name.clone();
                self.set_search_text(name);
            }
        }
        self.model.ui.end_search_input();
    }

    /// Esc in the search box: close the dropdown first, then leave the box
    pub(crate) fn cancel_search(&mut self) {
        if self.model.ui.suggestions_open && !self.model.suggestions().is_empty() {
            self.model.ui.suggestions_open = false;
            self.model.ui.suggestion_selection = None;
        } else {
            self.model.ui.end_search_input();
        }
    }

    pub(crate) fn cycle_consultation_type(&mut self) {
        let next = logic::ui::cycle_consultation_type(self.model.filters.consultation_type);
        self.update_filters(&PartialFilterState::consultation_type(next), HistoryMode::Push);
    }

    pub(crate) fn cycle_sort_by(&mut self) {
        let next = logic::ui::cycle_sort_by(self.model.filters.sort_by);
        self.update_filters(&PartialFilterState::sort_by(next), HistoryMode::Push);
    }

    /// Enter/Space on the filter panel row under the cursor
    pub(crate) fn activate_panel_row(&mut self) {
        let rows = self.model.panel_rows();
        let Some(row) = rows.get(self.model.ui.panel_cursor) else {
            return;
        };

        match panel::activate_row(row, &self.model.filters) {
            PanelAction::ToggleSection(section) => {
                self.model.ui.sections = self.model.ui.sections.toggled(section);
            }
            PanelAction::Update(partial) => self.update_filters(&partial, HistoryMode::Push),
        }

        // Rows come and go (Clear rows, folded sections); keep the cursor valid
        let len = self.model.panel_rows().len();
        self.model.ui.panel_cursor = self.model.ui.panel_cursor.min(len.saturating_sub(1));
    }

    pub(crate) fn clear_all_filters(&mut self) {
        if self.model.clear_filters() {
            self.model.ui.show_toast("Filters cleared");
        }
    }

    /// Show the shareable link for the current filters
    pub(crate) fn show_shareable_link(&mut self) {
        let link = self.model.shareable_url();
        tracing::info!(%link, "shareable link");
        self.model.ui.show_toast(format!("Link: {}", link));
    }
}
