//! Client for the school activity signup API.
//!
//! The data core (`catalog`, `filter`, `render`, `notice`, `debounce`) is
//! toolkit-free; the `activity-browser` binary binds it to iced and the
//! `activity-browser-ctl` binary drives it from a terminal.

pub mod api;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod notice;
pub mod render;
pub mod util;

/// Install the fmt subscriber used by both binaries.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activity_browser=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
