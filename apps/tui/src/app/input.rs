use crate::app::state::App;
use aqi_core::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if handle_help_toggle(app, key.code) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Right => app.select_tab(app.tab().next()),
        KeyCode::BackTab | KeyCode::Left => app.select_tab(app.tab().previous()),
        KeyCode::Char('1' | 'd') => app.select_tab(Tab::Dashboard),
        KeyCode::Char('2' | 'a') => app.select_tab(Tab::Analytics),
        _ => {}
    }
}

/// Help popup swallows every key except the ones that close it.
fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::F(1) | KeyCode::Char('?')) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}
