//! Display of the effective configuration

use anyhow::{Context, Result};

use super::load_config;

pub fn cmd_config() -> Result<()> {
    let config = load_config()?;
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
    print!("{}", yaml);
    Ok(())
}
