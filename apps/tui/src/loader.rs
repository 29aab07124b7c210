use crate::config::{AppConfig, ForecastQuery, ImportanceSource};
use aqi_core::forecast::parse_importance;
use aqi_core::{DashboardEvent, ForecastResponse, ImportanceEntry, LoadError};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Fetches the two datasets the dashboard needs. One attempt each; no
/// timeout and no retry.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    forecast_url: String,
    query: ForecastQuery,
    importance: ImportanceSource,
}

impl HttpSource {
    pub fn new(config: &AppConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aqi_dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            forecast_url: config.forecast_url().to_string(),
            query: config.query.clone(),
            importance: config.importance.clone(),
        })
    }

    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    pub async fn fetch_forecast(&self) -> Result<ForecastResponse, LoadError> {
        let mut request = self.client.get(&self.forecast_url);
        let params = self.query.pairs();
        if !params.is_empty() {
            request = request.query(&params);
        }

        let body = read_body(request).await?;
        ForecastResponse::from_json(&body)
    }

    pub async fn fetch_importance(&self) -> Result<Vec<ImportanceEntry>, LoadError> {
        let body = match &self.importance {
            ImportanceSource::Url(url) => read_body(self.client.get(url)).await?,
            ImportanceSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| LoadError::Io {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?
            }
        };
        parse_importance(&body)
    }
}

async fn read_body(request: reqwest::RequestBuilder) -> Result<String, LoadError> {
    let response = request
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))
}

/// Runs the forecast fetch and turns its outcome into a state event.
pub async fn forecast_event(source: &HttpSource) -> DashboardEvent {
    debug!(url = source.forecast_url(), "fetching forecast");
    match source.fetch_forecast().await {
        Ok(forecast) => {
            debug!(predictions = forecast.predictions.len(), "forecast loaded");
            DashboardEvent::ForecastLoaded(Box::new(forecast))
        }
        Err(e) => {
            error!(error = %e, status = ?e.status(), "forecast fetch failed");
            DashboardEvent::ForecastFailed(e.to_string())
        }
    }
}

/// Runs the importance fetch. Failure falls back to an empty list.
pub async fn importance_event(source: &HttpSource) -> DashboardEvent {
    debug!(source = %source.importance, "fetching feature importance");
    match source.fetch_importance().await {
        Ok(entries) => {
            debug!(entries = entries.len(), "feature importance loaded");
            DashboardEvent::ImportanceLoaded(entries)
        }
        Err(e) => {
            warn!(error = %e, "feature importance load error, showing an empty chart");
            DashboardEvent::ImportanceFailed(e.to_string())
        }
    }
}

/// Starts both fetches as independent tasks. Each sends exactly one event;
/// a closed channel (the UI already exited) is ignored.
pub fn spawn_loaders(
    source: Arc<HttpSource>,
    events: UnboundedSender<DashboardEvent>,
) -> (JoinHandle<()>, JoinHandle<()>) {
    let forecast = {
        let source = Arc::clone(&source);
        let events = events.clone();
        tokio::spawn(async move {
            let _ = events.send(forecast_event(&source).await);
        })
    };

    let importance = tokio::spawn(async move {
        let _ = events.send(importance_event(&source).await);
    });

    (forecast, importance)
}
