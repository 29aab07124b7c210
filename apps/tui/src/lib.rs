// Terminal front end for the AQI forecast dashboard
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod loader;
pub mod logging;
pub mod terminal;
pub mod ui;
