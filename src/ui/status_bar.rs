use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bottom status bar
///
/// First line: the current query (what the address bar would show) and the
/// history position. Second line: key legend.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    query: &str,
    history_position: (usize, usize),
    search_active: bool,
    vim_mode: bool,
) {
    let query_display = if query.is_empty() {
        "?".to_string()
    } else {
        format!("?{}", query)
    };
    let (position, total) = history_position;

    let status_line = Line::from(vec![
        Span::styled("Query: ", Style::default().fg(Color::Gray)),
        Span::styled(query_display, Style::default().fg(Color::White)),
        Span::styled(
            format!("  │  History {}/{}", position, total),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let legend = if search_active {
        "Type to search │ ↑↓ suggestions │ Enter accept │ Esc close".to_string()
    } else {
        let nav = if vim_mode { "j/k" } else { "↑↓" };
        format!(
            "{} move │ Tab focus │ Enter toggle │ c mode │ s sort │ x clear │ [ ] back/fwd │ y link │ q quit",
            nav
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(footer_title())
        .title_style(Style::default().fg(Color::DarkGray))
        .border_style(Style::default().fg(Color::Gray));

    let paragraph = Paragraph::new(vec![
        status_line,
        Line::from(Span::styled(
            legend,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(block);

    f.render_widget(paragraph, area);
}

fn footer_title() -> String {
    format!(" © {} Doctor Finder ", chrono::Local::now().year())
}
