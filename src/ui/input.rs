use crate::ui::app::App;
use crate::ui::layout::star_row_area;
use crate::ui::star_row::StarRow;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The dialog is modal: its OK button is the only thing that reacts.
    if app.confirm_dialog().is_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_confirm();
        }
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
        KeyCode::Char('[') => app.resize_row(-1),
        KeyCode::Char(']') => app.resize_row(1),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            app.activate(digit_to_index(ch));
        }
        _ => {}
    }
}

/// Left click on a star activates it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };

    let unit_count = app.control().unit_count();
    let row = star_row_area(Rect::new(0, 0, cols, rows), unit_count);
    if let Some(index) = StarRow::unit_at(row, unit_count, mouse.column, mouse.row) {
        app.activate(index);
    }
}

/// `1`..`9` pick stars 1-9, `0` picks star 10.
fn digit_to_index(ch: char) -> usize {
    match ch.to_digit(10) {
        Some(0) | None => 9,
        Some(n) => n as usize - 1,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
