//! Configuration management for ewproj.
//!
//! Configuration lives in the YAML frontmatter of a markdown file. A global
//! file (`~/.config/ewproj/config.md`) and a project file
//! (`.ewproj/config.md`) are both optional; values from the project file
//! win.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/ewproj/config.md)
    /// 2. Project config (.ewproj/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(crate::paths::PROJECT_CONFIG),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.discovery.validate()
    }

    /// Load merged configuration from the given global and project paths.
    /// Either file may be missing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;

        Ok(config)
    }
}

/// Returns the path to the global config file at ~/.config/ewproj/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/ewproj/config.md"))
}

/// Split content into frontmatter and body.
///
/// If the content starts with `---`, extracts the YAML frontmatter between
/// the first and second `---` delimiters, and returns the body after.
/// Otherwise returns None for frontmatter and the entire content as body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub discovery: Option<PartialDiscoveryConfig>,
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDiscoveryConfig {
    pub recursive: Option<bool>,
    pub extension: Option<String>,
    pub follow_links: Option<bool>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_discovery = self.discovery.unwrap_or_default();
        let global_output = self.output.unwrap_or_default();
        let project_discovery = project.discovery.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();

        Config {
            discovery: DiscoveryConfig {
                // Project value > global value > default
                recursive: project_discovery
                    .recursive
                    .or(global_discovery.recursive)
                    .unwrap_or_else(defaults::default_true),
                extension: project_discovery
                    .extension
                    .or(global_discovery.extension)
                    .unwrap_or_else(defaults::default_extension),
                follow_links: project_discovery
                    .follow_links
                    .or(global_discovery.follow_links)
                    .unwrap_or_default(),
                // Exclude lists replace rather than extend
                exclude: project_discovery
                    .exclude
                    .or(global_discovery.exclude)
                    .unwrap_or_default(),
            },
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
                color: project_output
                    .color
                    .or(global_output.color)
                    .unwrap_or_else(defaults::default_true),
            },
        }
    }
}
