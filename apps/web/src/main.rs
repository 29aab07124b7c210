mod fetch;
mod render;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use aqi_core::{DashboardState, Tab};
use ratzilla::ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

fn main() -> io::Result<()> {
    let state: fetch::SharedState = Rc::new(RefCell::new(DashboardState::new()));

    fetch::start(&state);
    spawn_local(fetch::load_forecast(state.clone()));
    spawn_local(fetch::load_importance(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| {
            let current = state.borrow().tab;
            let tab = match event.code {
                ratzilla::event::KeyCode::Left => current.previous(),
                ratzilla::event::KeyCode::Right => current.next(),
                ratzilla::event::KeyCode::Char('1') => Tab::Dashboard,
                ratzilla::event::KeyCode::Char('2') => Tab::Analytics,
                _ => return,
            };
            fetch::select_tab(&state, tab);
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("AQI Forecast")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        render::render(&state.borrow(), f, inner);
    });

    Ok(())
}
