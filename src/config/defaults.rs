//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locator::PROJECT_EXTENSION;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_true, bool, true);
default_fn!(default_extension, String, PROJECT_EXTENSION.to_string());

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// How project files are discovered under a directory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Descend into subdirectories (default: true)
    #[serde(default = "default_true")]
    pub recursive: bool,
    /// Project file extension without the leading dot (default: ewp)
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Follow symlinked directories while walking
    #[serde(default)]
    pub follow_links: bool,
    /// Glob patterns, relative to the scan root, for paths to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            recursive: default_true(),
            extension: default_extension(),
            follow_links: false,
            exclude: vec![],
        }
    }
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Colorize text output (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}
