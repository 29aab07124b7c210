// UI module for the AQI dashboard
// Handles all UI rendering functions

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use aqi_core::{ForecastView, Tab};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use theme::{border_style, muted, title_style, HIGHLIGHT};

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    if let Some(message) = app.dashboard.error() {
        screens::status::render_error(message, f, area);
    } else if let Some(forecast) = app.dashboard.data() {
        render_loaded(app, &ForecastView::derive(forecast), f, area);
    } else {
        screens::status::render_loading(app, f, area);
    }

    if app.show_help {
        screens::help::render_help_popup(f, area);
    }
}

fn render_loaded(app: &App, view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(view, f, chunks[0]);
    render_tabs(app.tab(), f, chunks[1]);

    match app.tab() {
        Tab::Dashboard => screens::dashboard::render_dashboard(view, f, chunks[2]),
        Tab::Analytics => screens::analytics::render_analytics(&app.dashboard, f, chunks[2]),
    }

    render_footer(app, f, chunks[3]);
}

fn render_header(view: &ForecastView, f: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(Text::from(vec![
        TextLine::from(Span::styled(view.title(), title_style())),
        TextLine::from(Span::styled("AI-Driven AQI Forecast & Analytics", muted())),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    f.render_widget(header, area);
}

fn render_tabs(selected: Tab, f: &mut Frame<'_>, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| format!(" {} {} ", tab.index() + 1, tab.title()));

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).border_style(muted()))
        .select(selected.index())
        .highlight_style(
            Style::default()
                .bg(HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![Span::styled(
        "Tab/←→: switch view | 1-2: jump | ?: help | q: quit",
        muted(),
    )];
    if let Some(loaded_at) = app.loaded_at {
        spans.push(Span::styled(
            format!(" | Loaded {}", loaded_at.format("%H:%M:%S")),
            muted(),
        ));
    }
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::{DashboardEvent, ForecastResponse, ImportanceEntry};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    const BODY: &str = r#"{
        "city": "Karachi",
        "pollutants_history": {"pm2_5": [10, 11, 12, 13, 14, 15, 16], "ozone": [30, null, 32]},
        "predictions": [
            {"day": "Mon", "date": "2024-01-01", "predicted_AQI": 45},
            {"day": "Tue", "date": "2024-01-02", "predicted_AQI": 155}
        ]
    }"#;

    fn draw(app: &App) -> Result<Buffer, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
        terminal.draw(|f| ui(app, f))?;
        Ok(terminal.backend().buffer().clone())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_app() -> Result<App, aqi_core::LoadError> {
        let mut app = App::new();
        app.apply(DashboardEvent::FetchStarted);
        app.apply(DashboardEvent::ForecastLoaded(Box::new(
            ForecastResponse::from_json(BODY)?,
        )));
        Ok(app)
    }

    #[test]
    fn loading_screen() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new();
        app.apply(DashboardEvent::FetchStarted);
        let text = buffer_text(&draw(&app)?);
        assert!(text.contains("Loading Air Quality Data..."));
        assert!(!text.contains("Analytics"));
        Ok(())
    }

    #[test]
    fn error_screen_replaces_the_dashboard() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new();
        app.apply(DashboardEvent::ForecastFailed(
            "Failed to fetch backend data".into(),
        ));
        let text = buffer_text(&draw(&app)?);
        assert!(text.contains("Error: Failed to fetch backend data"));
        assert!(!text.contains("Analytics"));
        assert!(!text.contains("Current AQI Status"));
        Ok(())
    }

    #[test]
    fn dashboard_shows_gauge_and_cards() -> Result<(), Box<dyn std::error::Error>> {
        let text = buffer_text(&draw(&loaded_app()?)?);
        assert!(text.contains("Karachi Air Quality Dashboard"));
        assert!(text.contains("100 AQI"));
        assert!(text.contains("Moderate"));
        assert!(text.contains("45.0"));
        assert!(text.contains("Good"));
        assert!(text.contains("Unhealthy"));
        assert!(!text.contains("Unhealthy (SG)"));
        assert!(text.contains("Past 7 Days Pollutant Trends"));
        Ok(())
    }

    #[test]
    fn importance_failure_keeps_the_dashboard() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = loaded_app()?;
        app.apply(DashboardEvent::ImportanceFailed("no such file".into()));
        assert!(buffer_text(&draw(&app)?).contains("Current AQI Status"));

        app.select_tab(Tab::Analytics);
        let text = buffer_text(&draw(&app)?);
        assert!(text.contains("No feature importance data"));
        assert!(text.contains("no such file"));
        assert!(text.contains("Model Performance Summary"));
        Ok(())
    }

    #[test]
    fn analytics_lists_features() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = loaded_app()?;
        app.apply(DashboardEvent::ImportanceLoaded(vec![
            ImportanceEntry {
                feature: "pm10".into(),
                importance: 0.42,
            },
            ImportanceEntry {
                feature: "ozone".into(),
                importance: 0.18,
            },
        ]));
        app.select_tab(Tab::Analytics);

        let text = buffer_text(&draw(&app)?);
        assert!(text.contains("Feature Importance (SHAP Analysis)"));
        assert!(text.contains("pm10"));
        assert!(text.contains("ozone"));
        assert!(text.contains("RMSE"));
        Ok(())
    }

    #[test]
    fn tab_round_trip_renders_identically() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = loaded_app()?;
        app.loaded_at = None;
        let before = draw(&app)?;

        app.select_tab(Tab::Analytics);
        assert_ne!(draw(&app)?, before);
        app.select_tab(Tab::Dashboard);
        assert_eq!(draw(&app)?, before);
        Ok(())
    }

    #[test]
    fn help_popup_overlays_the_view() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = loaded_app()?;
        app.show_help = true;
        let text = buffer_text(&draw(&app)?);
        assert!(text.contains("Keyboard Shortcuts:"));
        assert!(text.contains("Very Unhealthy"));
        Ok(())
    }
}
