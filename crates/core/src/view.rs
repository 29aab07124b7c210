use crate::aqi::{classify, AqiCategory};
use crate::chart::{average_aqi, gauge_fraction, shape_pollutant_rows, PollutantRow};
use crate::forecast::{CurrentPollutants, ForecastResponse, Pollutant};
use serde::Serialize;

/// City shown when the backend does not name one.
pub const DEFAULT_CITY: &str = "Karachi";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub day: String,
    pub date: String,
    pub aqi: f64,
    pub category: AqiCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    pub average: f64,
    pub fraction: f64,
    pub category: AqiCategory,
}

impl GaugeReading {
    /// Text drawn inside the gauge, e.g. "100 AQI".
    pub fn caption(&self) -> String {
        format!("{:.0} AQI", self.average.round())
    }
}

/// Everything the dashboard tab draws, derived from one forecast payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastView {
    pub city: String,
    pub gauge: Option<GaugeReading>,
    pub cards: Vec<ForecastCard>,
    pub pollutant_rows: Vec<PollutantRow>,
    pub current: Vec<(Pollutant, f64)>,
    pub note: Option<String>,
}

impl ForecastView {
    pub fn derive(forecast: &ForecastResponse) -> Self {
        let gauge = average_aqi(&forecast.predictions).map(|average| GaugeReading {
            average,
            fraction: gauge_fraction(average),
            category: classify(average),
        });

        let cards = forecast
            .predictions
            .iter()
            .map(|prediction| ForecastCard {
                day: prediction.day.clone(),
                date: prediction.date.clone(),
                aqi: prediction.predicted_aqi,
                category: classify(prediction.predicted_aqi),
            })
            .collect();

        Self {
            city: forecast
                .city
                .clone()
                .filter(|city| !city.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CITY.to_string()),
            gauge,
            cards,
            pollutant_rows: shape_pollutant_rows(&forecast.pollutants_history),
            current: current_readings(forecast.pollutants.as_ref()),
            note: forecast.note.clone(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} Air Quality Dashboard", self.city)
    }
}

fn current_readings(current: Option<&CurrentPollutants>) -> Vec<(Pollutant, f64)> {
    let Some(current) = current else {
        return Vec::new();
    };
    Pollutant::ALL
        .into_iter()
        .filter_map(|pollutant| current.reading(pollutant).map(|value| (pollutant, value)))
        .collect()
}
