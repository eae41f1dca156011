//! Common functionality for h2plan.
#![warn(missing_docs)]
pub mod cli;
pub mod costs;
pub mod error;
pub mod forecast;
pub mod history;
pub mod log;
pub mod settings;
pub mod units;

use std::path::PathBuf;

/// Get the path to the directory where program configuration is stored.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_default().join("h2plan")
}
