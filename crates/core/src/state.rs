use crate::forecast::{ForecastResponse, ImportanceEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Analytics,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Dashboard, Self::Analytics];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Analytics => 1,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Dashboard),
            1 => Some(Self::Analytics),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Analytics,
            Self::Analytics => Self::Dashboard,
        }
    }

    pub const fn previous(self) -> Self {
        // Two tabs: previous and next coincide.
        self.next()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ForecastStatus {
    #[default]
    Loading,
    Ready(ForecastResponse),
    Failed(String),
}

impl ForecastStatus {
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    FetchStarted,
    ForecastLoaded(Box<ForecastResponse>),
    ForecastFailed(String),
    ImportanceLoaded(Vec<ImportanceEntry>),
    ImportanceFailed(String),
    TabSelected(Tab),
}

/// Everything the renderers need. Only [`DashboardState::apply`] produces a
/// new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub forecast: ForecastStatus,
    pub importance: Vec<ImportanceEntry>,
    pub importance_error: Option<String>,
    pub tab: Tab,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn apply(self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::FetchStarted if !self.forecast.is_settled() => Self {
                forecast: ForecastStatus::Loading,
                ..self
            },
            DashboardEvent::ForecastLoaded(forecast) if !self.forecast.is_settled() => Self {
                forecast: ForecastStatus::Ready(*forecast),
                ..self
            },
            DashboardEvent::ForecastFailed(message) if !self.forecast.is_settled() => Self {
                forecast: ForecastStatus::Failed(message),
                ..self
            },
            DashboardEvent::ImportanceLoaded(entries) => Self {
                importance: entries,
                importance_error: None,
                ..self
            },
            DashboardEvent::ImportanceFailed(message) => Self {
                importance: Vec::new(),
                importance_error: Some(message),
                ..self
            },
            DashboardEvent::TabSelected(tab) => Self { tab, ..self },
            DashboardEvent::FetchStarted
            | DashboardEvent::ForecastLoaded(_)
            | DashboardEvent::ForecastFailed(_) => self,
        }
    }

    pub const fn is_loading(&self) -> bool {
        !self.forecast.is_settled()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.forecast {
            ForecastStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub const fn data(&self) -> Option<&ForecastResponse> {
        match &self.forecast {
            ForecastStatus::Ready(forecast) => Some(forecast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::PollutantsHistory;

    fn forecast() -> Box<ForecastResponse> {
        Box::new(ForecastResponse {
            predictions: Vec::new(),
            pollutants_history: PollutantsHistory::default(),
            city: None,
            pollutants: None,
            note: None,
        })
    }

    fn entry(name: &str) -> ImportanceEntry {
        ImportanceEntry {
            feature: name.to_string(),
            importance: 0.5,
        }
    }

    #[test]
    fn starts_loading_on_the_dashboard() {
        let state = DashboardState::new().apply(DashboardEvent::FetchStarted);
        assert!(state.is_loading());
        assert_eq!(state.tab, Tab::Dashboard);
        assert!(state.importance.is_empty());
    }

    #[test]
    fn first_forecast_outcome_wins() {
        let failed = DashboardState::new()
            .apply(DashboardEvent::ForecastFailed("boom".into()))
            .apply(DashboardEvent::ForecastLoaded(forecast()))
            .apply(DashboardEvent::ForecastFailed("second".into()))
            .apply(DashboardEvent::FetchStarted);
        assert_eq!(failed.error(), Some("boom"));
        assert!(failed.data().is_none());

        let ready = DashboardState::new()
            .apply(DashboardEvent::ForecastLoaded(forecast()))
            .apply(DashboardEvent::ForecastFailed("late".into()));
        assert!(ready.data().is_some());
        assert_eq!(ready.error(), None);
    }

    #[test]
    fn fetches_may_complete_in_either_order() {
        let forecast_first = DashboardState::new()
            .apply(DashboardEvent::ForecastLoaded(forecast()))
            .apply(DashboardEvent::ImportanceLoaded(vec![entry("pm10")]));
        let importance_first = DashboardState::new()
            .apply(DashboardEvent::ImportanceLoaded(vec![entry("pm10")]))
            .apply(DashboardEvent::ForecastLoaded(forecast()));
        assert_eq!(forecast_first, importance_first);
    }

    #[test]
    fn importance_failure_is_not_fatal() {
        let state = DashboardState::new()
            .apply(DashboardEvent::ImportanceFailed("missing file".into()))
            .apply(DashboardEvent::ForecastLoaded(forecast()));
        assert!(state.data().is_some());
        assert!(state.error().is_none());
        assert!(state.importance.is_empty());
        assert_eq!(state.importance_error.as_deref(), Some("missing file"));
    }

    #[test]
    fn tab_round_trip_restores_the_initial_state() {
        let initial = DashboardState::new().apply(DashboardEvent::ForecastLoaded(forecast()));
        let round_trip = initial
            .clone()
            .apply(DashboardEvent::TabSelected(Tab::Analytics))
            .apply(DashboardEvent::TabSelected(Tab::Dashboard));
        assert_eq!(initial, round_trip);
    }

    #[test]
    fn tab_cycling() {
        assert_eq!(Tab::Dashboard.next(), Tab::Analytics);
        assert_eq!(Tab::Analytics.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.previous(), Tab::Analytics);
        assert_eq!(Tab::from_index(Tab::Analytics.index()), Some(Tab::Analytics));
        assert_eq!(Tab::from_index(2), None);
    }
}
