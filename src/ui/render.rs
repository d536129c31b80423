use docfinder::model::{Focus, LoadState, Model};
use ratatui::Frame;

use super::{
    doctor_list::{self, ListContent},
    filter_panel, layout, search, status_bar, toast,
};

/// Main render function - draws the whole screen from the model
pub fn render(f: &mut Frame, model: &Model) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);
    let ui = &model.ui;

    search::render_search_input(
        f,
        layout_info.search_area,
        &model.filters.search,
        ui.search_input_active,
        ui.focus == Focus::Search,
        model.directory.visible.len(),
        ui.vim_mode,
    );

    filter_panel::render_filter_panel(
        f,
        layout_info.filters_area,
        &model.panel_rows(),
        &model.filters,
        &ui.sections,
        ui.panel_cursor,
        ui.focus == Focus::Filters,
    );

    let content = match &model.directory.load_state {
        LoadState::Loading => ListContent::Loading,
        LoadState::Failed { message } => ListContent::Failed(message),
        LoadState::Loaded => ListContent::Doctors(&model.directory.visible),
    };
    doctor_list::render_doctor_list(
        f,
        layout_info.list_area,
        content,
        ui.list_selection,
        ui.focus == Focus::List,
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        model.current_query(),
        model.history.position(),
        ui.search_input_active,
        ui.vim_mode,
    );

    // Dropdown draws over the panel and list
    if ui.suggestions_open {
        let suggestions = model.suggestions();
        if !suggestions.is_empty() {
            let area = layout::suggestions_area(layout_info.search_area, size, suggestions.len());
            search::render_suggestions(f, area, &suggestions, ui.suggestion_selection);
        }
    }

    // Toast last so it sits on top
    if let Some((message, _)) = &ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
