// App module for aqi_dashboard
// Holds the terminal-side state around the shared dashboard state machine

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
