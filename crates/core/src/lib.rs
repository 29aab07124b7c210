// Shared model and view derivation for the AQI dashboards.
// Kept free of async runtimes so the wasm front end can depend on it.

pub mod aqi;
pub mod chart;
pub mod endpoints;
pub mod error;
pub mod forecast;
pub mod state;
pub mod view;

pub use aqi::{classify, AqiCategory};
pub use endpoints::Environment;
pub use error::LoadError;
pub use forecast::{ForecastResponse, ImportanceEntry, Pollutant, Prediction};
pub use state::{DashboardEvent, DashboardState, ForecastStatus, Tab};
pub use view::ForecastView;
