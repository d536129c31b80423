use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a toast near the bottom of `area`, above the status bar
///
/// Messages starting with "Error:" get the red treatment.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_width = area.width.saturating_sub(4).min(90);
    let width = ((message.width() + 6) as u16).min(max_width);
    let height = 3u16.min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height + 4),
        width,
        height,
    };

    f.render_widget(Clear, toast_area);

    let (icon, color) = if message.starts_with("Error:") {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, toast_area);
}
