/// Command-line argument parsing and game runner
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG board snapshots
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Interactive terminal front end
pub mod terminal;
