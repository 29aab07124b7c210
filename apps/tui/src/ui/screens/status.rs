use crate::app::App;
use crate::ui::theme::{border_style, muted};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

fn middle_row(area: Rect, height: u16) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

pub fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let row = middle_row(area, 1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(32),
            Constraint::Min(0),
        ])
        .split(row);

    let throbber = Throbber::default()
        .label("Loading Air Quality Data...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_set(BRAILLE_SIX);
    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, columns[1], &mut state);
}

/// Forecast failure replaces the whole dashboard with the message.
pub fn render_error(message: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Press q to quit", muted())),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(block, area);
    f.render_widget(paragraph, middle_row(area, 3));
}
