use crate::ui::theme::{border_style, muted, ACCENT};
use crate::ui::widgets::charts::render_importance_chart;
use aqi_core::forecast::MODEL_PERFORMANCE;
use aqi_core::DashboardState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_analytics(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(7)])
        .split(area);

    render_importance_chart(
        &state.importance,
        state.importance_error.as_deref(),
        f,
        rows[0],
    );
    render_model_performance(f, rows[1]);
}

fn render_model_performance(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Model Performance Summary")
        .borders(Borders::ALL)
        .border_style(border_style());
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)])
        .split(inner);

    let metrics = MODEL_PERFORMANCE.metrics();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(metrics.iter().map(|_| Constraint::Ratio(1, 4)))
        .split(rows[0]);

    for ((name, value), column) in metrics.iter().zip(columns.iter()) {
        let card = Paragraph::new(Text::from(vec![
            TextLine::from(Span::styled(*name, muted())),
            TextLine::from(Span::styled(
                format!("{value:.2}"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(muted()));
        f.render_widget(card, *column);
    }

    let note = Paragraph::new(TextLine::from(Span::styled(
        MODEL_PERFORMANCE.note(),
        Style::default().fg(ACCENT),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(note, rows[1]);
}
