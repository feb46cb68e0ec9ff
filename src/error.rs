//! Error types for loading project files.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::xml::XmlError;

/// Why a project file could not be loaded or reloaded.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The path is missing or names something other than a regular file.
    #[error("'{}' is not a file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a well-formed project document", .path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("expected 'project' as root tag of '{}', found '{found}'", .path.display())]
    UnexpectedRootTag { path: PathBuf, found: String },

    #[error("invalid configuration in '{}': {message}", .path.display())]
    InvalidConfiguration { path: PathBuf, message: String },
}

impl ProjectError {
    /// The file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            ProjectError::NotAFile { path }
            | ProjectError::Io { path, .. }
            | ProjectError::MalformedDocument { path, .. }
            | ProjectError::UnexpectedRootTag { path, .. }
            | ProjectError::InvalidConfiguration { path, .. } => path,
        }
    }

    /// True when the file was found but its contents were rejected.
    pub fn is_invalid_content(&self) -> bool {
        matches!(
            self,
            ProjectError::MalformedDocument { .. }
                | ProjectError::UnexpectedRootTag { .. }
                | ProjectError::InvalidConfiguration { .. }
        )
    }
}
