//! Search Input UI
//!
//! Renders the search box with query, match count and blinking cursor, and
//! the autocomplete dropdown beneath it.

use docfinder::api::Doctor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search text
/// - `active`: Whether input is actively receiving keystrokes
/// - `focused`: Whether the search pane has focus
/// - `match_count`: Number of doctors currently visible
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    focused: bool,
    match_count: usize,
    vim_mode: bool,
) {
    let title = if active {
        format!(" Doctor Finder - Search ({} matches) - Enter to accept, Esc to close ", match_count)
    } else if !query.is_empty() {
        format!(" Doctor Finder - Search ({} matches) ", match_count)
    } else {
        let search_key = if vim_mode { "/" } else { "/ or Ctrl-F" };
        format!(" Doctor Finder - Search ({}) ", search_key)
    };

    let border_color = if active {
        Color::Cyan
    } else if focused {
        Color::White
    } else {
        Color::Gray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Name: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else if query.is_empty() {
        Line::from(Span::styled(
            "Search doctors by name...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("Name: {}", query),
            Style::default().fg(Color::Gray),
        ))
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the suggestion dropdown over whatever sits below the search box
pub fn render_suggestions(
    f: &mut Frame,
    area: Rect,
    suggestions: &[Doctor],
    selected: Option<usize>,
) {
    if suggestions.is_empty() || area.height < 3 {
        return;
    }

    f.render_widget(Clear, area);

    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|doctor| ListItem::new(Line::from(doctor.name.as_str())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
