use aqi_core::endpoints::{Environment, UnknownEnvironment, FEATURE_IMPORTANCE_PATH};
use dotenv::dotenv;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_FILE: &str = "aqi_dashboard.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AQI_ENV: {0}")]
    Environment(#[from] UnknownEnvironment),

    #[error("{key} must be a number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Where the feature importance report is read from. A terminal has no
/// "same origin", so a local file is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportanceSource {
    Url(String),
    File(PathBuf),
}

impl ImportanceSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl Default for ImportanceSource {
    fn default() -> Self {
        Self::File(PathBuf::from(FEATURE_IMPORTANCE_PATH))
    }
}

impl fmt::Display for ImportanceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Optional query parameters understood by the forecast backend. Nothing is
/// sent unless configured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl ForecastQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(lat) = self.lat {
            pairs.push(("lat", lat.to_string()));
        }
        if let Some(lon) = self.lon {
            pairs.push(("lon", lon.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub forecast_url_override: Option<String>,
    pub importance: ImportanceSource,
    pub query: ForecastQuery,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Builds the configuration from a key lookup, normally the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match read("AQI_ENV") {
            Some(value) => value.parse()?,
            None => Environment::from_build_profile(),
        };

        let query = ForecastQuery {
            city: read("AQI_CITY"),
            lat: read("AQI_LAT")
                .map(|value| parse_number("AQI_LAT", &value))
                .transpose()?,
            lon: read("AQI_LON")
                .map(|value| parse_number("AQI_LON", &value))
                .transpose()?,
        };

        Ok(Self {
            environment,
            forecast_url_override: read("AQI_FORECAST_URL"),
            importance: read("AQI_IMPORTANCE")
                .map(|value| ImportanceSource::parse(&value))
                .unwrap_or_default(),
            query,
            log_file: read("AQI_LOG_FILE").map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
            debug: read("DEBUG").is_some_and(|value| value != "0" && value != "false"),
        })
    }

    pub fn forecast_url(&self) -> &str {
        self.forecast_url_override
            .as_deref()
            .unwrap_or_else(|| self.environment.forecast_url())
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

/// Loads `.env` (if any) and resolves the configuration from the environment.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    dotenv().ok();
    Ok(AppConfig::from_lookup(|key| env::var(key).ok())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::endpoints::{DEVELOPMENT_FORECAST_URL, PRODUCTION_FORECAST_URL};
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn environment_selects_the_forecast_url() -> Result<(), ConfigError> {
        let production = config_from(&[("AQI_ENV", "production")])?;
        assert_eq!(production.forecast_url(), PRODUCTION_FORECAST_URL);

        let development = config_from(&[("AQI_ENV", "development")])?;
        assert_eq!(development.forecast_url(), DEVELOPMENT_FORECAST_URL);
        assert!(development.query.pairs().is_empty());
        assert_eq!(development.importance, ImportanceSource::default());
        Ok(())
    }

    #[test]
    fn explicit_url_wins_over_environment() -> Result<(), ConfigError> {
        let config = config_from(&[
            ("AQI_ENV", "production"),
            ("AQI_FORECAST_URL", "http://localhost:9000/forecast"),
        ])?;
        assert_eq!(config.forecast_url(), "http://localhost:9000/forecast");
        Ok(())
    }

    #[test]
    fn importance_source_by_scheme() {
        assert_eq!(
            ImportanceSource::parse("https://example.org/feature_importance.json"),
            ImportanceSource::Url("https://example.org/feature_importance.json".into())
        );
        assert_eq!(
            ImportanceSource::parse("data/shap.json"),
            ImportanceSource::File(PathBuf::from("data/shap.json"))
        );
    }

    #[test]
    fn query_and_flags() -> Result<(), ConfigError> {
        let config = config_from(&[
            ("AQI_CITY", "Lahore"),
            ("AQI_LAT", "31.52"),
            ("AQI_LON", "74.35"),
            ("DEBUG", "1"),
        ])?;
        assert_eq!(
            config.query.pairs(),
            vec![
                ("city", "Lahore".to_string()),
                ("lat", "31.52".to_string()),
                ("lon", "74.35".to_string()),
            ]
        );
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("AQI_ENV", "staging")]),
            Err(ConfigError::Environment(_))
        ));
        assert!(matches!(
            config_from(&[("AQI_LAT", "north")]),
            Err(ConfigError::InvalidNumber { key: "AQI_LAT", .. })
        ));
    }
}
