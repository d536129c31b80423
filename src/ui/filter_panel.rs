use docfinder::logic::panel::{PanelRow, SectionVisibility};
use docfinder::model::FilterState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the filter panel
///
/// Radio options show `(•)`/`( )`, specialties show `[x]`/`[ ]`, and
/// section headers show their fold state. The cursor is only highlighted
/// while the panel has focus.
pub fn render_filter_panel(
    f: &mut Frame,
    area: Rect,
    rows: &[PanelRow],
    filters: &FilterState,
    sections: &SectionVisibility,
    cursor: usize,
    focused: bool,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, filters, sections)))
        .collect();

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let title = if filters.is_default() {
        " Filters ".to_string()
    } else {
        " Filters (x to clear) ".to_string()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(if focused {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    if focused && !rows.is_empty() {
        state.select(Some(cursor.min(rows.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn row_line<'a>(row: &'a PanelRow, filters: &FilterState, sections: &SectionVisibility) -> Line<'a> {
    let checked = row.is_checked(filters);
    let checked_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    match row {
        PanelRow::Header(section) => {
            let marker = if sections.is_expanded(*section) { "▾ " } else { "▸ " };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    section.title(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        PanelRow::Consultation(value) => radio_line(value.as_str(), checked, checked_style),
        PanelRow::Sort(value) => radio_line(value.label(), checked, checked_style),
        PanelRow::Specialty(label) => {
            let mark = if checked { "[x] " } else { "[ ] " };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(mark, checked_style),
                Span::styled(label.as_str(), checked_style),
            ])
        }
        PanelRow::ClearConsultation | PanelRow::ClearSpecialties | PanelRow::ClearSort => {
            Line::from(Span::styled(
                "  Clear",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        }
    }
}

fn radio_line(label: &str, checked: bool, style: Style) -> Line<'_> {
    let mark = if checked { "(•) " } else { "( ) " };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(mark, style),
        Span::styled(label, style),
    ])
}
