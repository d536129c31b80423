//! History navigation
//!
//! Back/forward replace the filter state with the decoded entry laid over
//! the defaults, the way a page reacts to a history pop.

use crate::App;

impl App {
    pub(crate) fn navigate_back(&mut self) {
        self.model.ui.end_search_input();
        if self.model.navigate_back() {
            tracing::debug!(query = %self.model.current_query(), "history back");
        } else {
            self.model.ui.show_toast("Error: already at the oldest entry");
        }
    }

    pub(crate) fn navigate_forward(&mut self) {
        self.model.ui.end_search_input();
        if self.model.navigate_forward() {
            tracing::debug!(query = %self.model.current_query(), "history forward");
        } else {
            self.model.ui.show_toast("Error: already at the newest entry");
        }
    }
}
