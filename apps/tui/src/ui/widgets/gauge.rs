use crate::ui::theme::{border_style, category_color, muted, pollutant_color};
use aqi_core::view::ForecastView;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

/// Average forecast AQI as a gauge, its band, and the latest pollutant readings.
pub fn render_aqi_gauge(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Current AQI Status")
        .borders(Borders::ALL)
        .border_style(border_style());
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(2, 1));
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let Some(gauge) = &view.gauge else {
        let paragraph = Paragraph::new("No predictions available")
            .style(muted())
            .alignment(Alignment::Center);
        f.render_widget(paragraph, sections[0]);
        return;
    };

    let color = category_color(gauge.category);
    let widget = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(muted()))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(gauge.fraction)
        .label(Span::styled(
            gauge.caption(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(widget, sections[0]);

    let label = Paragraph::new(TextLine::from(Span::styled(
        gauge.category.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(label, sections[1]);

    if view.current.is_empty() {
        return;
    }

    let mut lines = vec![TextLine::from(Span::styled("Latest readings", muted()))];
    lines.extend(view.current.iter().map(|(pollutant, value)| {
        TextLine::from(vec![
            Span::styled(
                format!("{:<6}", pollutant.code()),
                Style::default().fg(pollutant_color(*pollutant)),
            ),
            Span::raw(format!("{value:>8.2}")),
        ])
    }));
    f.render_widget(Paragraph::new(Text::from(lines)), sections[2]);
}
