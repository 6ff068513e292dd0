use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h')
    ) {
        app.back();
        return;
    }

    if app.visible_screen() == Screen::Detail {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.activate_cursor(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
