use std::fmt;
use std::str::FromStr;

pub const PRODUCTION_FORECAST_URL: &str =
    "https://aqi-forecast-dashboard-production.up.railway.app/forecast";
pub const DEVELOPMENT_FORECAST_URL: &str = "http://127.0.0.1:8080/forecast";

/// Local file holding the SHAP feature importance report.
pub const FEATURE_IMPORTANCE_PATH: &str = "feature_importance.json";

/// Same report served next to the web page, resolved from the site root.
pub const FEATURE_IMPORTANCE_URL: &str = "/feature_importance.json";

/// Deployment context that selects the forecast backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Release builds talk to production, debug builds to a local backend.
    pub const fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    pub const fn forecast_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_FORECAST_URL,
            Self::Development => DEVELOPMENT_FORECAST_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnvironment(pub String);

impl fmt::Display for UnknownEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown environment '{}' (expected production or development)", self.0)
    }
}

impl std::error::Error for UnknownEnvironment {}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" | "local" => Ok(Self::Development),
            other => Err(UnknownEnvironment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_environment_names() {
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(" PROD ".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn each_environment_has_its_own_backend() {
        assert_eq!(Environment::Production.forecast_url(), PRODUCTION_FORECAST_URL);
        assert_eq!(Environment::Development.forecast_url(), DEVELOPMENT_FORECAST_URL);
    }

    #[test]
    fn web_importance_url_is_origin_absolute() {
        assert_eq!(FEATURE_IMPORTANCE_URL, "/feature_importance.json");
        assert!(FEATURE_IMPORTANCE_URL.ends_with(FEATURE_IMPORTANCE_PATH));
    }
}
