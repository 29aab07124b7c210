use aqi_core::{DashboardEvent, DashboardState, Tab};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

/// Spinner frame interval while the forecast is loading.
const THROBBER_INTERVAL: Duration = Duration::from_millis(120);

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub dashboard: DashboardState,
    pub show_help: bool,
    pub throbber: ThrobberState,
    pub loaded_at: Option<DateTime<Local>>,
    pub last_frame: Instant,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            dashboard: DashboardState::new(),
            show_help: false,
            throbber: ThrobberState::default(),
            loaded_at: None,
            last_frame: Instant::now(),
        }
    }

    /// Folds one loader or UI event into the dashboard state.
    pub fn apply(&mut self, event: DashboardEvent) {
        let was_loading = self.dashboard.is_loading();
        self.dashboard = std::mem::take(&mut self.dashboard).apply(event);

        if was_loading && self.dashboard.data().is_some() {
            self.loaded_at = Some(Local::now());
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.apply(DashboardEvent::TabSelected(tab));
    }

    pub const fn tab(&self) -> Tab {
        self.dashboard.tab
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn update(&mut self) {
        if !self.dashboard.is_loading() {
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_frame) >= THROBBER_INTERVAL {
            self.throbber.calc_next();
            self.last_frame = now;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::forecast::PollutantsHistory;
    use aqi_core::ForecastResponse;

    fn loaded() -> DashboardEvent {
        DashboardEvent::ForecastLoaded(Box::new(ForecastResponse {
            predictions: Vec::new(),
            pollutants_history: PollutantsHistory::default(),
            city: None,
            pollutants: None,
            note: None,
        }))
    }

    #[test]
    fn records_when_the_forecast_arrived() {
        let mut app = App::new();
        app.apply(DashboardEvent::FetchStarted);
        assert!(app.loaded_at.is_none());

        app.apply(loaded());
        assert!(app.loaded_at.is_some());
    }

    #[test]
    fn failure_does_not_set_a_load_time() {
        let mut app = App::new();
        app.apply(DashboardEvent::ForecastFailed("down".into()));
        assert!(app.loaded_at.is_none());
        assert_eq!(app.dashboard.error(), Some("down"));
    }

    #[test]
    fn select_tab_goes_through_the_state_machine() {
        let mut app = App::new();
        app.select_tab(Tab::Analytics);
        assert_eq!(app.tab(), Tab::Analytics);
        app.select_tab(Tab::Dashboard);
        assert_eq!(app.tab(), Tab::Dashboard);
    }
}
