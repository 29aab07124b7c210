use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::config::AppConfig;
use crate::loader::{forecast_event, importance_event, HttpSource};
use crate::ui;
use aqi_core::forecast::MODEL_PERFORMANCE;
use aqi_core::view::{ForecastCard, GaugeReading};
use aqi_core::{DashboardEvent, DashboardState, ForecastView, ImportanceEntry};

/// Run the application in headless mode (no UI)
pub async fn run_headless(config: &AppConfig, json: bool) -> Result<()> {
    let source = HttpSource::new(config)?;
    info!(url = source.forecast_url(), "headless forecast fetch");

    let (forecast, importance) =
        tokio::join!(forecast_event(&source), importance_event(&source));
    let state = DashboardState::new()
        .apply(DashboardEvent::FetchStarted)
        .apply(forecast)
        .apply(importance);

    let summary = headless_summary(&state)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_headless_text(&summary));
    }

    Ok(())
}

/// Builds the printable summary, failing when the forecast did not load.
pub fn headless_summary(state: &DashboardState) -> Result<HeadlessSummary> {
    if let Some(message) = state.error() {
        return Err(eyre!("Error: {message}"));
    }
    let forecast = state
        .data()
        .ok_or_else(|| eyre!("Forecast not loaded"))?;
    let view = ForecastView::derive(forecast);

    Ok(HeadlessSummary {
        title: view.title(),
        gauge: view.gauge,
        forecast: view.cards,
        note: view.note,
        feature_importance: state.importance.clone(),
        importance_error: state.importance_error.clone(),
    })
}

pub fn render_headless_text(summary: &HeadlessSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", summary.title);
    let _ = writeln!(out, "{}", "=".repeat(summary.title.len()));

    match &summary.gauge {
        Some(gauge) => {
            let _ = writeln!(
                out,
                "Average AQI: {} ({})",
                gauge.caption(),
                gauge.category.label()
            );
        }
        None => {
            let _ = writeln!(out, "Average AQI: no predictions");
        }
    }

    let _ = writeln!(out, "\nForecast:");
    for card in &summary.forecast {
        let _ = writeln!(
            out,
            "- {} | {} | {:.1} | {}",
            card.day,
            card.date,
            card.aqi,
            card.category.short_label()
        );
    }

    if let Some(note) = &summary.note {
        let _ = writeln!(out, "\nNote: {note}");
    }

    let _ = writeln!(out, "\nFeature Importance:");
    if summary.feature_importance.is_empty() {
        let _ = writeln!(out, "- (none)");
    }
    for entry in &summary.feature_importance {
        let _ = writeln!(out, "- {}: {:.4}", entry.feature, entry.importance);
    }

    let _ = writeln!(out, "\nModel: {}", MODEL_PERFORMANCE.model);
    for (name, value) in MODEL_PERFORMANCE.metrics() {
        let _ = writeln!(out, "- {name}: {value:.2}");
    }
    let _ = writeln!(out, "{}", MODEL_PERFORMANCE.note());

    out
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessSummary {
    title: String,
    gauge: Option<GaugeReading>,
    forecast: Vec<ForecastCard>,
    note: Option<String>,
    feature_importance: Vec<ImportanceEntry>,
    importance_error: Option<String>,
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut events: UnboundedReceiver<DashboardEvent>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        while let Ok(dashboard_event) = events.try_recv() {
            debug!(event = event_name(&dashboard_event), "applying dashboard event");
            app.apply(dashboard_event);
        }

        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key);
                }
                Ok(Event::Resize(_, _)) => {
                    // Redrawn on the next iteration
                }
                Ok(_) | Err(_) => {}
            }
        }

        tokio::task::yield_now().await;
    }
    Ok(())
}

const fn event_name(event: &DashboardEvent) -> &'static str {
    match event {
        DashboardEvent::FetchStarted => "FetchStarted",
        DashboardEvent::ForecastLoaded(_) => "ForecastLoaded",
        DashboardEvent::ForecastFailed(_) => "ForecastFailed",
        DashboardEvent::ImportanceLoaded(_) => "ImportanceLoaded",
        DashboardEvent::ImportanceFailed(_) => "ImportanceFailed",
        DashboardEvent::TabSelected(_) => "TabSelected",
    }
}
