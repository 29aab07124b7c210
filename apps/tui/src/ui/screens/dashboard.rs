use crate::ui::theme::muted;
use crate::ui::widgets::cards::render_forecast_cards;
use crate::ui::widgets::charts::render_pollutant_chart;
use crate::ui::widgets::gauge::render_aqi_gauge;
use aqi_core::ForecastView;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn render_dashboard(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let note_height = u16::from(view.note.is_some());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),         // Gauge and trends
            Constraint::Length(5),       // Forecast cards
            Constraint::Length(note_height),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    render_aqi_gauge(view, f, top[0]);
    render_pollutant_chart(&view.pollutant_rows, f, top[1]);
    render_forecast_cards(&view.cards, f, rows[1]);

    if let Some(note) = &view.note {
        let paragraph = Paragraph::new(TextLine::from(Span::styled(note.as_str(), muted())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, rows[2]);
    }
}
