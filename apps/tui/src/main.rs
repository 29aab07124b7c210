use aqi_dashboard::app::App;
use aqi_dashboard::cli::CliArgs;
use aqi_dashboard::config::init_app_config;
use aqi_dashboard::loader::{spawn_loaders, HttpSource};
use aqi_dashboard::{event, logging, terminal};
use aqi_core::DashboardEvent;
use clap::Parser;
use color_eyre::Result;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let cli = CliArgs::parse();
    let mut config = init_app_config()?;
    cli.apply_overrides(&mut config);

    // Check if we're running in a terminal
    let headless = cli.headless || !is_terminal();
    logging::init_tracing(&config, headless)?;
    info!(
        environment = %config.environment,
        url = config.forecast_url(),
        headless,
        "starting aqi_dashboard"
    );

    if headless {
        return event::run_headless(&config, cli.json).await;
    }

    let source = Arc::new(HttpSource::new(&config)?);
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    // Initialize application state
    let mut app = App::new();
    app.apply(DashboardEvent::FetchStarted);
    let _loaders = spawn_loaders(source, tx);

    // Setup terminal
    terminal::install_panic_hook();
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, rx).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
