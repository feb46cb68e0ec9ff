//! Command module structure for the ewproj CLI

use anyhow::Result;
use std::error::Error;

use ewproj::config::{Config, OutputFormat};
use ewproj::ProjectError;

pub mod check;
pub mod config;
pub mod list;
pub mod show;
pub mod util;

/// Load the effective configuration and apply its color setting.
pub fn load_config() -> Result<Config> {
    let config = Config::load()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    Ok(config)
}

/// Whether output should be JSON, either forced by a flag or configured.
pub fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.output.format == OutputFormat::Json
}

/// An error followed by its sources, joined with `: `.
pub fn describe(error: &ProjectError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
