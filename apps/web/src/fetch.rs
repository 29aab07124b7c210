use std::cell::RefCell;
use std::rc::Rc;

use aqi_core::endpoints::FEATURE_IMPORTANCE_URL;
use aqi_core::{DashboardEvent, DashboardState, Environment, LoadError};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub type SharedState = Rc<RefCell<DashboardState>>;

fn dispatch(state: &SharedState, event: DashboardEvent) {
    let current = std::mem::take(&mut *state.borrow_mut());
    *state.borrow_mut() = current.apply(event);
}

async fn fetch_json<T: DeserializeOwned>(url: &str, mode: RequestMode) -> Result<T, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(mode);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| LoadError::Network(format!("{e:?}")))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Network(format!("{e:?}")))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| LoadError::Network("Failed to read response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
        });
    }

    let body = response
        .json()
        .map_err(|e| LoadError::Decode(format!("{e:?}")))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Decode(format!("{e:?}")))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| LoadError::Decode(e.to_string()))
}

pub async fn load_forecast(state: SharedState) {
    let url = Environment::from_build_profile().forecast_url();
    web_sys::console::log_1(&format!("Fetching forecast from {url}").into());

    let event = match fetch_json(url, RequestMode::Cors).await {
        Ok(forecast) => DashboardEvent::ForecastLoaded(Box::new(forecast)),
        Err(error) => {
            web_sys::console::error_1(&format!("Forecast fetch failed: {error}").into());
            DashboardEvent::ForecastFailed(error.to_string())
        }
    };
    dispatch(&state, event);
}

pub async fn load_importance(state: SharedState) {
    let event = match fetch_json(FEATURE_IMPORTANCE_URL, RequestMode::SameOrigin).await {
        Ok(entries) => DashboardEvent::ImportanceLoaded(entries),
        Err(error) => {
            web_sys::console::warn_1(
                &format!("Feature importance load error: {error}").into(),
            );
            DashboardEvent::ImportanceFailed(error.to_string())
        }
    };
    dispatch(&state, event);
}

pub fn select_tab(state: &SharedState, tab: aqi_core::Tab) {
    dispatch(state, DashboardEvent::TabSelected(tab));
}

pub fn start(state: &SharedState) {
    dispatch(state, DashboardEvent::FetchStarted);
}
