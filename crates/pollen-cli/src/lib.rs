//! Pollen alert CLI library.
//!
//! Configuration, the season gate, the weather lookup, the alert pipeline
//! and terminal output for the `pollen-alert` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod schedule;
pub mod weather;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use pipeline::{build_alert, Alert, Outcome, RunContext};
pub use schedule::{Gate, SeasonWindow};
