use crate::config::{AppConfig, ImportanceSource};
use aqi_core::Environment;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "aqi_dashboard", version, about = "Air quality forecast dashboard")]
pub struct CliArgs {
    /// Print the forecast summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Backend to use: production or development
    #[arg(long, value_name = "ENV")]
    pub env: Option<Environment>,

    /// Override the forecast endpoint
    #[arg(long = "forecast-url", value_name = "URL")]
    pub forecast_url: Option<String>,

    /// Feature importance file or URL
    #[arg(long, value_name = "PATH|URL")]
    pub importance: Option<String>,

    /// City name passed to the backend
    #[arg(long)]
    pub city: Option<String>,

    /// Latitude passed to the backend
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude passed to the backend
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Override the log file used by the interactive UI
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Flags take precedence over values resolved from the environment.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(environment) = self.env {
            config.environment = environment;
        }
        if let Some(url) = &self.forecast_url {
            config.forecast_url_override = Some(url.clone());
        }
        if let Some(importance) = &self.importance {
            config.importance = ImportanceSource::parse(importance);
        }
        if let Some(city) = &self.city {
            config.query.city = Some(city.clone());
        }
        if self.lat.is_some() {
            config.query.lat = self.lat;
        }
        if self.lon.is_some() {
            config.query.lon = self.lon;
        }
        if let Some(path) = &self.log_file {
            config.log_file = path.clone();
        }
        if self.debug {
            config.debug = true;
        }
    }
}
