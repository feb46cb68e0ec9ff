//! Validation logic for configuration and derived values.

use anyhow::{Context, Result};
use glob::Pattern;

use super::defaults::DiscoveryConfig;
use crate::locator::ProjectFileLocator;

impl DiscoveryConfig {
    /// Validate discovery configuration
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            anyhow::bail!("discovery.extension must not be empty");
        }

        if self.extension.starts_with('.') {
            anyhow::bail!(
                "discovery.extension must not start with a dot, got '{}' (use '{}')",
                self.extension,
                self.extension.trim_start_matches('.')
            );
        }

        if self.extension.contains(['/', '\\']) {
            anyhow::bail!(
                "discovery.extension must not contain path separators, got '{}'",
                self.extension
            );
        }

        self.exclude_patterns().map(|_| ())
    }

    /// Compile the exclude globs.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.exclude
            .iter()
            .map(|raw| {
                Pattern::new(raw)
                    .with_context(|| format!("Invalid discovery.exclude pattern '{}'", raw))
            })
            .collect()
    }

    /// Build a locator that applies this configuration.
    pub fn locator(&self) -> Result<ProjectFileLocator> {
        self.validate()?;

        Ok(ProjectFileLocator::new()
            .with_extension(self.extension.clone())
            .with_follow_links(self.follow_links)
            .with_excludes(self.exclude_patterns()?))
    }
}
