//! Cadence command-line front end
//!
//! Thin wiring around the Cadence libraries: configuration loading, a
//! logging audio output, and one module per subcommand.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod output;

pub use config::AppConfig;
pub use output::LogOutput;
