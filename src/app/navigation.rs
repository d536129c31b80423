//! Focus and selection movement

use docfinder::logic;
use docfinder::model::Focus;

use crate::App;

impl App {
    pub(crate) fn focus_next(&mut self) {
        self.model.ui.end_search_input();
        self.model.ui.focus = self.model.ui.focus.next();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.model.ui.end_search_input();
        self.model.ui.focus = self.model.ui.focus.previous();
    }

    /// Move within whichever pane has focus
    pub(crate) fn move_selection(&mut self, delta: isize) {
        match self.model.ui.focus {
            Focus::List => {
                let len = self.model.directory.visible.len();
                self.model.ui.list_selection =
                    logic::ui::move_selection(self.model.ui.list_selection, len, delta);
            }
            Focus::Filters => {
                let len = self.model.panel_rows().len();
                if let Some(next) =
                    logic::ui::move_selection(Some(self.model.ui.panel_cursor), len, delta)
                {
                    self.model.ui.panel_cursor = next;
                }
            }
            Focus::Search => self.move_suggestion(delta),
        }
    }

    pub(crate) fn select_first(&mut self) {
        self.move_selection(isize::MIN / 2);
    }

    pub(crate) fn select_last(&mut self) {
        self.move_selection(isize::MAX / 2);
    }
}
