//! Keyboard Input Handler
//!
//! Maps key events to App intents. The search box captures printable keys
//! while it is active; everywhere else single letters are shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use docfinder::model::Focus;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // History navigation works from anywhere
    if key.modifiers.contains(KeyModifiers::ALT) {
        match key.code {
            KeyCode::Left => return app.navigate_back(),
            KeyCode::Right => return app.navigate_forward(),
            _ => {}
        }
    }

    if app.model.ui.search_input_active {
        handle_search_key(app, key);
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    // Letter shortcuts only fire without Ctrl/Alt
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

    match key.code {
        KeyCode::Char('q') if plain => app.model.ui.should_quit = true,
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.begin_search_input()
        }
        KeyCode::Char('/') => app.model.ui.begin_search_input(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Char('[') => app.navigate_back(),
        KeyCode::Char(']') => app.navigate_forward(),
        KeyCode::Char('c') if plain => app.cycle_consultation_type(),
        KeyCode::Char('s') if plain => app.cycle_sort_by(),
        KeyCode::Char('x') if plain => app.clear_all_filters(),
        KeyCode::Char('y') if plain => app.show_shareable_link(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') if vim_mode => app.move_selection(-1),
        KeyCode::Char('j') if vim_mode => app.move_selection(1),
        KeyCode::Char('h') if vim_mode => app.focus_previous(),
        KeyCode::Char('l') if vim_mode => app.focus_next(),
        KeyCode::Char('G') if vim_mode => app.select_last(),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => match app.model.ui.focus {
            Focus::Filters => app.activate_panel_row(),
            Focus::Search => app.model.ui.begin_search_input(),
            Focus::List => {}
        },
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Up => app.move_suggestion(-1),
        KeyCode::Down => app.move_suggestion(1),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c)
        }
        _ => {}
    }
}
