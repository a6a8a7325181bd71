//! Application Layer
//!
//! User-facing CLI, configuration management and gesture file input.

pub mod cli;
pub mod config;
pub mod gesture_file;

pub use cli::Cli;
pub use config::Config;
