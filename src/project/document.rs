//! A single parsed project file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::configuration::Configuration;
use super::Project;
use crate::error::ProjectError;
use crate::xml::XmlNode;

/// Tag every project document must have at its root.
pub const ROOT_TAG: &str = "project";

/// The parsed tree and the configurations derived from it, always from the
/// same successful load.
#[derive(Debug)]
pub struct ProjectSnapshot {
    pub tree: XmlNode,
    pub configurations: Arc<[Configuration]>,
}

impl ProjectSnapshot {
    /// Stat, read, parse, check the root tag and derive configurations.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            return Err(ProjectError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let tree = XmlNode::parse(&content).map_err(|source| ProjectError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        })?;

        if tree.tag_name() != ROOT_TAG {
            return Err(ProjectError::UnexpectedRootTag {
                path: path.to_path_buf(),
                found: tree.tag_name().to_string(),
            });
        }

        let configurations = Configuration::from_xml(&tree, path)?;

        Ok(Self {
            tree,
            configurations: configurations.into(),
        })
    }
}

/// An `.ewp` file loaded into memory.
///
/// The path is fixed at construction. The tree and configuration list live
/// in one [`ProjectSnapshot`] that [`reload`](ProjectDocument::reload)
/// replaces with a single assignment, so readers on other threads see
/// either the old pair or the new pair.
#[derive(Debug)]
pub struct ProjectDocument {
    path: PathBuf,
    state: RwLock<Arc<ProjectSnapshot>>,
}

impl ProjectDocument {
    /// Load a project file eagerly. Fails if the file cannot be loaded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProjectError> {
        let path = path.into();
        let snapshot = ProjectSnapshot::load(&path)?;

        tracing::debug!(
            path = %path.display(),
            configurations = snapshot.configurations.len(),
            "Loaded project"
        );

        Ok(Self {
            path,
            state: RwLock::new(Arc::new(snapshot)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directory or extension.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The current tree and configurations as one consistent pair.
    pub fn snapshot(&self) -> Arc<ProjectSnapshot> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    pub fn configurations(&self) -> Arc<[Configuration]> {
        Arc::clone(&self.snapshot().configurations)
    }

    pub fn find_configuration(&self, name: &str) -> Option<Configuration> {
        self.snapshot()
            .configurations
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    /// Re-read the file.
    ///
    /// On failure the previous tree and configurations stay in place and the
    /// reason is returned.
    pub fn reload(&self) -> Result<(), ProjectError> {
        match ProjectSnapshot::load(&self.path) {
            Ok(snapshot) => {
                let count = snapshot.configurations.len();
                let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
                *guard = Arc::new(snapshot);
                drop(guard);

                tracing::debug!(
                    path = %self.path.display(),
                    configurations = count,
                    "Reloaded project"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Reload failed, keeping previous state"
                );
                Err(e)
            }
        }
    }
}

impl Project for ProjectDocument {
    fn path(&self) -> &Path {
        ProjectDocument::path(self)
    }

    fn name(&self) -> String {
        ProjectDocument::name(self)
    }

    fn configurations(&self) -> Arc<[Configuration]> {
        ProjectDocument::configurations(self)
    }

    fn reload(&self) -> Result<(), ProjectError> {
        ProjectDocument::reload(self)
    }

    fn find_configuration(&self, name: &str) -> Option<Configuration> {
        ProjectDocument::find_configuration(self, name)
    }
}
