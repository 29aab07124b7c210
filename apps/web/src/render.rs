use aqi_core::chart::{
    importance_bar_max, importance_bar_value, max_value, series_segments, HISTORY_DAYS,
};
use aqi_core::forecast::MODEL_PERFORMANCE;
use aqi_core::view::{ForecastCard, ForecastView};
use aqi_core::{AqiCategory, DashboardState, Pollutant, Tab};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span, Text},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType,
        Paragraph, Tabs, Wrap,
    },
    Frame,
};

const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

const fn category_color(category: AqiCategory) -> Color {
    rgb(category.rgb())
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
}

fn placeholder(text: String, block: Block<'_>, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(block);
    f.render_widget(paragraph, area);
}

pub fn render(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    if let Some(message) = state.error() {
        let paragraph = Paragraph::new(TextLine::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let Some(forecast) = state.data() else {
        let paragraph = Paragraph::new(Text::from(TextLine::from("Loading Air Quality Data...")))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let view = ForecastView::derive(forecast);
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(12),
        ])
        .split(area);

    render_header(&view, f, main_layout[0]);
    render_tabs(state.tab, f, main_layout[1]);

    match state.tab {
        Tab::Dashboard => render_dashboard(&view, f, main_layout[2]),
        Tab::Analytics => render_analytics(state, f, main_layout[2]),
    }
}

fn render_header(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled(
            view.title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "AI-Driven AQI Forecast & Analytics",
            Style::default().fg(Color::Gray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Paragraph::new(Text::from(line))
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

fn render_tabs(selected: Tab, f: &mut Frame<'_>, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| TextLine::from(format!("{} {}", tab.index() + 1, tab.title())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, area);
}

fn render_dashboard(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(5),
            Constraint::Length(u16::from(view.note.is_some())),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    render_gauge(view, f, top[0]);
    render_trends(view, f, top[1]);
    render_cards(&view.cards, f, rows[1]);

    if let Some(note) = &view.note {
        let paragraph = Paragraph::new(TextLine::from(Span::styled(
            note.as_str(),
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center);
        f.render_widget(paragraph, rows[2]);
    }
}

fn render_gauge(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let block = panel("Current AQI Status");
    let Some(gauge) = &view.gauge else {
        placeholder("No predictions available".to_string(), block, f, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let color = category_color(gauge.category);
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(gauge.fraction)
        .label(Span::styled(
            gauge.caption(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(widget, sections[0]);

    let label = Paragraph::new(TextLine::from(Span::styled(
        gauge.category.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(label, sections[1]);

    let readings = view
        .current
        .iter()
        .map(|(pollutant, value)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{:<6}", pollutant.code()),
                    Style::default().fg(rgb(pollutant.rgb())),
                ),
                Span::raw(format!("{value:>8.2}")),
            ])
        })
        .collect::<Vec<_>>();
    f.render_widget(Paragraph::new(Text::from(readings)), sections[2]);
}

fn render_trends(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let block = panel("Past 7 Days Pollutant Trends");
    let Some(max) = max_value(&view.pollutant_rows) else {
        placeholder("No pollutant history available".to_string(), block, f, area);
        return;
    };

    let series: Vec<(Pollutant, Vec<Vec<(f64, f64)>>)> = Pollutant::ALL
        .into_iter()
        .map(|pollutant| (pollutant, series_segments(&view.pollutant_rows, pollutant)))
        .collect();

    let datasets = series
        .iter()
        .flat_map(|(pollutant, segments)| {
            segments.iter().enumerate().map(move |(index, segment)| {
                let dataset = Dataset::default()
                    .marker(Marker::Braille)
                    .graph_type(if segment.len() == 1 {
                        GraphType::Scatter
                    } else {
                        GraphType::Line
                    })
                    .style(Style::default().fg(rgb(pollutant.rgb())))
                    .data(segment);
                if index == 0 {
                    dataset.name(pollutant.code())
                } else {
                    dataset
                }
            })
        })
        .collect::<Vec<_>>();

    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    #[allow(clippy::cast_precision_loss)]
    let x_max = HISTORY_DAYS as f64;

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([1.0, x_max])
                .labels(vec![Span::raw("Day 1"), Span::raw(format!("Day {HISTORY_DAYS}"))]),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw(format!("{y_max:.0}"))]),
        );
    f.render_widget(chart, area);
}

fn render_cards(cards: &[ForecastCard], f: &mut Frame<'_>, area: Rect) {
    if cards.is_empty() {
        placeholder("No forecast available".to_string(), panel("Forecast"), f, area);
        return;
    }

    let count = u32::try_from(cards.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let color = category_color(card.category);
        let paragraph = Paragraph::new(Text::from(vec![
            TextLine::from(Span::styled(
                card.date.as_str(),
                Style::default().fg(Color::Gray),
            )),
            TextLine::from(format!("{:.1}", card.aqi)),
            TextLine::from(Span::styled(
                card.category.short_label(),
                Style::default().fg(color),
            )),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(card.day.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(paragraph, *column);
    }
}

fn render_analytics(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    let block = panel("Feature Importance (SHAP Analysis)");
    if state.importance.is_empty() {
        let text = state.importance_error.as_ref().map_or_else(
            || "No feature importance data".to_string(),
            |error| format!("No feature importance data\n{error}"),
        );
        placeholder(text, block, f, rows[0]);
    } else {
        let bars: Vec<Bar<'_>> = state
            .importance
            .iter()
            .map(|entry| {
                Bar::default()
                    .value(importance_bar_value(entry.importance))
                    .text_value(format!("{:.3}", entry.importance))
                    .label(TextLine::from(entry.feature.as_str()))
                    .style(Style::default().fg(Color::Rgb(0x1a, 0xbc, 0x9c)))
                    .value_style(Style::default().fg(Color::White))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .max(importance_bar_max(&state.importance))
            .bar_gap(1)
            .bar_width(8);
        f.render_widget(chart, rows[0]);
    }

    let metrics = MODEL_PERFORMANCE
        .metrics()
        .iter()
        .flat_map(|(name, value)| {
            [
                Span::styled(format!("{name}: "), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{value:.2}   "),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]
        })
        .collect::<Vec<_>>();

    let summary = Paragraph::new(Text::from(vec![
        TextLine::from(metrics),
        TextLine::from(Span::styled(
            MODEL_PERFORMANCE.note(),
            Style::default().fg(Color::Cyan),
        )),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(panel("Model Performance Summary"));
    f.render_widget(summary, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::{DashboardEvent, ForecastResponse, ImportanceEntry};
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::buffer::{Buffer, Cell};
    use ratzilla::ratatui::Terminal;

    const BODY: &str = r#"{
        "city": "Lahore",
        "note": "Day 1 prediction adjusted for realistic dust conditions",
        "pollutants": {"pm2_5": 41.2},
        "pollutants_history": {"pm2_5": [10, 11, null, 13, 14, 15, 16]},
        "predictions": [
            {"day": "Mon", "date": "2024-01-01", "predicted_AQI": 45},
            {"day": "Tue", "date": "2024-01-02", "predicted_AQI": 155}
        ]
    }"#;

    fn draw(state: &DashboardState) -> Result<Buffer, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
        terminal.draw(|f| {
            let area = f.area();
            render(state, f, area);
        })?;
        Ok(terminal.backend().buffer().clone())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded() -> Result<DashboardState, aqi_core::LoadError> {
        Ok(DashboardState::new()
            .apply(DashboardEvent::FetchStarted)
            .apply(DashboardEvent::ForecastLoaded(Box::new(
                ForecastResponse::from_json(BODY)?,
            ))))
    }

    #[test]
    fn loading_then_error() -> Result<(), Box<dyn std::error::Error>> {
        let loading = DashboardState::new().apply(DashboardEvent::FetchStarted);
        assert!(buffer_text(&draw(&loading)?).contains("Loading Air Quality Data..."));

        let failed = loading.apply(DashboardEvent::ForecastFailed(
            "Failed to fetch backend data".into(),
        ));
        let text = buffer_text(&draw(&failed)?);
        assert!(text.contains("Error: Failed to fetch backend data"));
        assert!(!text.contains("Dashboard"));
        Ok(())
    }

    #[test]
    fn dashboard_shows_gauge_cards_and_note() -> Result<(), Box<dyn std::error::Error>> {
        let text = buffer_text(&draw(&loaded()?)?);
        assert!(text.contains("Lahore Air Quality Dashboard"));
        assert!(text.contains("100 AQI"));
        assert!(text.contains("Moderate"));
        assert!(text.contains("45.0"));
        assert!(text.contains("155.0"));
        assert!(text.contains("Unhealthy"));
        assert!(text.contains("PM2_5"));
        assert!(text.contains("Day 1 prediction adjusted"));
        Ok(())
    }

    #[test]
    fn analytics_shows_bars_and_model_note() -> Result<(), Box<dyn std::error::Error>> {
        let state = loaded()?
            .apply(DashboardEvent::ImportanceLoaded(vec![
                ImportanceEntry {
                    feature: "pm10".into(),
                    importance: 0.42,
                },
                ImportanceEntry {
                    feature: "ozone".into(),
                    importance: 0.18,
                },
            ]))
            .apply(DashboardEvent::TabSelected(Tab::Analytics));

        let text = buffer_text(&draw(&state)?);
        assert!(text.contains("pm10"));
        assert!(text.contains("ozone"));
        assert!(text.contains("0.420"));
        assert!(text.contains("excellent performance"));
        Ok(())
    }

    #[test]
    fn missing_importance_shows_the_reason() -> Result<(), Box<dyn std::error::Error>> {
        let state = loaded()?
            .apply(DashboardEvent::ImportanceFailed("HTTP 404".into()))
            .apply(DashboardEvent::TabSelected(Tab::Analytics));
        let text = buffer_text(&draw(&state)?);
        assert!(text.contains("No feature importance data"));
        assert!(text.contains("HTTP 404"));
        Ok(())
    }

    #[test]
    fn tab_round_trip_renders_identically() -> Result<(), Box<dyn std::error::Error>> {
        let initial = loaded()?;
        let before = draw(&initial)?;
        let round_trip = initial
            .apply(DashboardEvent::TabSelected(Tab::Analytics))
            .apply(DashboardEvent::TabSelected(Tab::Dashboard));
        assert_eq!(draw(&round_trip)?, before);
        Ok(())
    }
}
