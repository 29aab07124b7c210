pub mod analytics;
pub mod dashboard;
pub mod help;
pub mod status;
