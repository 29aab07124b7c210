use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Prediction {
    pub day: String,
    pub date: String,
    #[serde(rename = "predicted_AQI")]
    pub predicted_aqi: f64,
}

/// Daily pollutant averages for the past week, one array per pollutant.
/// Arrays the backend leaves out deserialize as `None`; `null` entries inside
/// an array are kept as gaps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PollutantsHistory {
    #[serde(default)]
    pub pm2_5: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub pm10: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub carbon_monoxide: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub nitrogen_dioxide: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sulphur_dioxide: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub ozone: Option<Vec<Option<f64>>>,
}

impl PollutantsHistory {
    pub fn series(&self, pollutant: Pollutant) -> Option<&[Option<f64>]> {
        let series = match pollutant {
            Pollutant::Pm2_5 => &self.pm2_5,
            Pollutant::Pm10 => &self.pm10,
            Pollutant::CarbonMonoxide => &self.carbon_monoxide,
            Pollutant::NitrogenDioxide => &self.nitrogen_dioxide,
            Pollutant::SulphurDioxide => &self.sulphur_dioxide,
            Pollutant::Ozone => &self.ozone,
        };
        series.as_deref()
    }
}

/// Latest single reading per pollutant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CurrentPollutants {
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub carbon_monoxide: Option<f64>,
    #[serde(default)]
    pub nitrogen_dioxide: Option<f64>,
    #[serde(default)]
    pub sulphur_dioxide: Option<f64>,
    #[serde(default)]
    pub ozone: Option<f64>,
}

impl CurrentPollutants {
    pub const fn reading(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::CarbonMonoxide => self.carbon_monoxide,
            Pollutant::NitrogenDioxide => self.nitrogen_dioxide,
            Pollutant::SulphurDioxide => self.sulphur_dioxide,
            Pollutant::Ozone => self.ozone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForecastResponse {
    pub predictions: Vec<Prediction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pollutants_history: PollutantsHistory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pollutants: Option<CurrentPollutants>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ForecastResponse {
    pub fn from_json(body: &str) -> Result<Self, crate::LoadError> {
        serde_json::from_str(body).map_err(|e| crate::LoadError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImportanceEntry {
    #[serde(rename = "Feature")]
    pub feature: String,
    #[serde(rename = "Importance")]
    pub importance: f64,
}

pub fn parse_importance(body: &str) -> Result<Vec<ImportanceEntry>, crate::LoadError> {
    serde_json::from_str(body).map_err(|e| crate::LoadError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    Pm2_5,
    Pm10,
    CarbonMonoxide,
    NitrogenDioxide,
    SulphurDioxide,
    Ozone,
}

impl Pollutant {
    pub const ALL: [Self; 6] = [
        Self::Pm2_5,
        Self::Pm10,
        Self::CarbonMonoxide,
        Self::NitrogenDioxide,
        Self::SulphurDioxide,
        Self::Ozone,
    ];

    /// Key used by the backend payload.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pm2_5 => "pm2_5",
            Self::Pm10 => "pm10",
            Self::CarbonMonoxide => "carbon_monoxide",
            Self::NitrogenDioxide => "nitrogen_dioxide",
            Self::SulphurDioxide => "sulphur_dioxide",
            Self::Ozone => "ozone",
        }
    }

    /// Short code used in chart legends.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pm2_5 => "PM2_5",
            Self::Pm10 => "PM10",
            Self::CarbonMonoxide => "CO",
            Self::NitrogenDioxide => "NO2",
            Self::SulphurDioxide => "SO2",
            Self::Ozone => "O3",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Pm2_5 => 0,
            Self::Pm10 => 1,
            Self::CarbonMonoxide => 2,
            Self::NitrogenDioxide => 3,
            Self::SulphurDioxide => 4,
            Self::Ozone => 5,
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Pm2_5 => (0xff, 0x57, 0x33),
            Self::Pm10 => (0x33, 0xc1, 0xff),
            Self::CarbonMonoxide => (0xff, 0xc3, 0x00),
            Self::NitrogenDioxide => (0x90, 0x0c, 0x3f),
            Self::SulphurDioxide => (0x2e, 0xcc, 0x71),
            Self::Ozone => (0x8e, 0x44, 0xad),
        }
    }
}

/// Static summary of how the forecasting model scored offline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelPerformance {
    pub model: &'static str,
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
    pub mse: f64,
    pub verdict: &'static str,
}

pub const MODEL_PERFORMANCE: ModelPerformance = ModelPerformance {
    model: "Random Forest",
    r2: 0.99,
    rmse: 2.24,
    mae: 0.52,
    mse: 5.02,
    verdict: "evaluated with excellent performance — near-perfect fit for current AQI forecast data.",
};

impl ModelPerformance {
    pub fn metrics(&self) -> [(&'static str, f64); 4] {
        [
            ("R² Score", self.r2),
            ("RMSE", self.rmse),
            ("MAE", self.mae),
            ("MSE", self.mse),
        ]
    }

    /// One-line verdict shown under the metrics.
    pub fn note(&self) -> String {
        format!("{} model {}", self.model, self.verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload_with_extra_fields() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "city": "Karachi",
            "note": "Day 1 prediction adjusted for realistic dust conditions",
            "pollutants": {"pm2_5": 41.2, "pm10": 88.0},
            "pollutants_history": {"pm2_5": [1, 2, 3], "ozone": [4.5]},
            "predictions": [{"date": "2024-01-01", "day": "Day 1", "predicted_AQI": 45.5}],
            "unexpected": true
        }"#;

        let forecast = ForecastResponse::from_json(body)?;
        assert_eq!(forecast.city.as_deref(), Some("Karachi"));
        assert_eq!(forecast.predictions.len(), 1);
        assert!((forecast.predictions[0].predicted_aqi - 45.5).abs() < f64::EPSILON);
        assert_eq!(
            forecast.pollutants_history.series(Pollutant::Pm2_5),
            Some(&[Some(1.0), Some(2.0), Some(3.0)][..])
        );
        assert_eq!(forecast.pollutants_history.series(Pollutant::Pm10), None);
        let current = forecast.pollutants.unwrap_or_default();
        assert_eq!(current.reading(Pollutant::Pm10), Some(88.0));
        assert_eq!(current.reading(Pollutant::Ozone), None);

        Ok(())
    }

    #[test]
    fn missing_history_is_treated_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let forecast = ForecastResponse::from_json(r#"{"predictions": []}"#)?;
        assert_eq!(forecast.pollutants_history, PollutantsHistory::default());
        Ok(())
    }

    #[test]
    fn null_history_is_treated_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let forecast = ForecastResponse::from_json(
            r#"{"predictions": [{"date": "2024-01-01", "day": "Day 1", "predicted_AQI": 80}],
                "pollutants_history": null}"#,
        )?;
        assert_eq!(forecast.pollutants_history, PollutantsHistory::default());
        assert_eq!(forecast.predictions.len(), 1);
        Ok(())
    }

    #[test]
    fn null_entries_in_a_series_are_gaps() -> Result<(), Box<dyn std::error::Error>> {
        let forecast = ForecastResponse::from_json(
            r#"{"predictions": [],
                "pollutants_history": {"pm2_5": [1.0, null, 3.0, 4, 5, 6, 7], "ozone": null}}"#,
        )?;
        let series = forecast.pollutants_history.series(Pollutant::Pm2_5);
        assert_eq!(series.map(<[Option<f64>]>::len), Some(7));
        assert_eq!(series.and_then(|s| s.get(1).copied()), Some(None));
        assert_eq!(forecast.pollutants_history.series(Pollutant::Ozone), None);
        Ok(())
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let error = ForecastResponse::from_json("<html>").err();
        assert!(matches!(error, Some(crate::LoadError::Decode(_))));
    }

    #[test]
    fn model_note_names_the_model() {
        assert_eq!(
            MODEL_PERFORMANCE.note(),
            "Random Forest model evaluated with excellent performance — near-perfect fit for current AQI forecast data."
        );
    }

    #[test]
    fn importance_keeps_file_order() -> Result<(), Box<dyn std::error::Error>> {
        let entries = parse_importance(
            r#"[{"Feature": "pm2_5", "Importance": 0.61},
                {"Feature": "pm10", "Importance": 0.22},
                {"Feature": "pm2_5", "Importance": 0.01}]"#,
        )?;
        let names: Vec<_> = entries.iter().map(|e| e.feature.as_str()).collect();
        assert_eq!(names, ["pm2_5", "pm10", "pm2_5"]);
        Ok(())
    }
}
