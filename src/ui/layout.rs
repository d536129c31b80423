use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the filter panel, in columns
const FILTER_PANEL_WIDTH: u16 = 36;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search box across the top
    pub search_area: Rect,
    /// Filter panel on the left
    pub filters_area: Rect,
    /// Doctor list on the right
    pub list_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box (border, input, border)
            Constraint::Min(5),    // Filters + list
            Constraint::Length(4), // Status bar (border, link, legend, border)
        ])
        .split(terminal_size);

    // Narrow terminals get a narrower panel rather than no list
    let panel_width = FILTER_PANEL_WIDTH.min(main_chunks[1].width / 2);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(panel_width), Constraint::Min(10)])
        .split(main_chunks[1]);

    LayoutInfo {
        search_area: main_chunks[0],
        filters_area: content_chunks[0],
        list_area: content_chunks[1],
        status_area: main_chunks[2],
    }
}

/// Area for the suggestion dropdown, hanging below the search box
pub fn suggestions_area(search_area: Rect, bounds: Rect, count: usize) -> Rect {
    let height = (count as u16 + 2).min(bounds.height.saturating_sub(search_area.bottom()));
    Rect {
        x: search_area.x + 1,
        y: search_area.bottom(),
        width: search_area.width.saturating_sub(2),
        height,
    }
}
