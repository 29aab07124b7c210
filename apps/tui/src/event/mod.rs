mod loop_handler;

pub use loop_handler::{headless_summary, render_headless_text, run, run_headless, HeadlessSummary};
