use crate::ui::theme::{category_color, muted};
use aqi_core::view::ForecastCard;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// One card per predicted day, bordered in the colour of its AQI band.
pub fn render_forecast_cards(cards: &[ForecastCard], f: &mut Frame<'_>, area: Rect) {
    if cards.is_empty() {
        let paragraph = Paragraph::new("No forecast available")
            .style(muted())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(muted()));
        f.render_widget(paragraph, area);
        return;
    }

    let count = u32::try_from(cards.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        render_card(card, f, *column);
    }
}

fn render_card(card: &ForecastCard, f: &mut Frame<'_>, area: Rect) {
    let color = category_color(card.category);

    let block = Block::default()
        .title(Span::styled(
            card.day.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        TextLine::from(Span::styled(card.date.clone(), muted())),
        TextLine::from(Span::styled(
            format!("{:.1}", card.aqi),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            card.category.short_label(),
            Style::default().fg(color),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
