//! Project files, their build configurations and how they are discovered.

mod configuration;
mod document;
mod factory;

use std::path::Path;
use std::sync::Arc;

use crate::error::ProjectError;

pub use configuration::{Configuration, Define, PROJ_DIR_MACRO};
pub use document::{ProjectDocument, ProjectSnapshot, ROOT_TAG};
pub use factory::{
    collect_best_effort, create_project_from, create_projects_from, create_projects_with,
};

/// What consumers of a loaded project rely on.
pub trait Project {
    fn path(&self) -> &Path;

    /// File name without directory or extension.
    fn name(&self) -> String;

    fn configurations(&self) -> Arc<[Configuration]>;

    /// Re-read the project from disk. On error the previous state is kept.
    fn reload(&self) -> Result<(), ProjectError>;

    /// First configuration with exactly this name.
    fn find_configuration(&self, name: &str) -> Option<Configuration> {
        self.configurations()
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }
}
