use crate::ui::app::App;
use crate::ui::timer::Step;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The prompt is modal: only answers reach it.
    if app.confirm_dialog().is_visible() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.accept_reset(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.dismiss_reset(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                app.toggle_confirm_selection()
            }
            KeyCode::Enter => app.submit_confirm(),
            _ => {}
        }
        return;
    }

    if app.show_help() {
        app.toggle_help();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_run(),
        KeyCode::Char('r') => app.request_reset(),
        KeyCode::Up | KeyCode::Char('k') => app.adjust_session(Step::Up),
        KeyCode::Down | KeyCode::Char('j') => app.adjust_session(Step::Down),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_break(Step::Up),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_break(Step::Down),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
