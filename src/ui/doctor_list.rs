use docfinder::api::Doctor;
use docfinder::logic::formatting;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// What the list pane should show
pub enum ListContent<'a> {
    Loading,
    Failed(&'a str),
    Doctors(&'a [Doctor]),
}

/// Render the results pane: doctor cards, or a single status message
pub fn render_doctor_list(
    f: &mut Frame,
    area: Rect,
    content: ListContent,
    selected: Option<usize>,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let count = match &content {
        ListContent::Doctors(doctors) => doctors.len(),
        _ => 0,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", formatting::results_header(count)))
        .border_style(Style::default().fg(border_color));

    let doctors = match content {
        ListContent::Loading => {
            return render_message(f, area, block, "Loading doctors...", Color::Gray);
        }
        ListContent::Failed(message) => {
            return render_message(f, area, block, message, Color::Red);
        }
        ListContent::Doctors([]) => {
            return render_message(
                f,
                area,
                block,
                formatting::NO_RESULTS_MESSAGE,
                Color::Yellow,
            );
        }
        ListContent::Doctors(doctors) => doctors,
    };

    // Borders plus the two-column indent
    let text_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = doctors
        .iter()
        .map(|doctor| ListItem::new(card_lines(doctor, text_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_message(f: &mut Frame, area: Rect, block: Block, message: &str, color: Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(color),
    )))
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// One card: name, specialties, experience, clinic, rating/fee, badges, spacer
fn card_lines(doctor: &Doctor, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::Gray);
    let mut lines = vec![Line::from(Span::styled(
        formatting::truncate_to_width(&doctor.name, width),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    let specialties = formatting::specialty_line(doctor);
    if !specialties.is_empty() {
        lines.push(Line::from(Span::styled(
            formatting::truncate_to_width(&specialties, width),
            Style::default().fg(Color::Cyan),
        )));
    }

    lines.push(Line::from(Span::styled(
        formatting::experience_text(doctor).to_string(),
        dim,
    )));

    if let Some(clinic) = formatting::clinic_line(doctor) {
        lines.push(Line::from(Span::styled(
            formatting::truncate_to_width(&clinic, width),
            dim,
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::raw(formatting::rating_text(doctor)),
        Span::raw("   "),
        Span::styled(
            formatting::fee_text(doctor).to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let badges = formatting::badges(doctor);
    if !badges.is_empty() {
        let mut spans = Vec::new();
        for badge in badges {
            spans.push(Span::styled(
                format!("[{}]", badge),
                Style::default().fg(Color::Magenta),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines
}
