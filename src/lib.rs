//! # ewproj - IAR Embedded Workbench project files
//!
//! Loads `.ewp` project files into memory, exposes their build
//! configurations, and reloads them when the file on disk changes.
//!
//! ## Core Concepts
//!
//! - **Projects**: One `.ewp` file, parsed eagerly into an XML tree plus the
//!   configurations derived from it
//! - **Configurations**: Named build variants (`Debug`, `Release`, ...) with
//!   their toolchain, defines and include paths
//! - **Discovery**: Best-effort scanning of a directory tree where files that
//!   fail to load are skipped, not reported as errors
//!
//! ## Modules
//!
//! - [`project`] - Project documents, configurations and factory functions
//! - [`locator`] - Directory walking and the project-file predicate
//! - [`xml`] - Owned XML element tree
//! - [`error`] - Load and reload errors
//! - [`config`] - Configuration of the `ewproj` tool itself
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use ewproj::project::{create_projects_from, Project};
//!
//! for project in create_projects_from(Path::new("firmware"), true) {
//!     println!("{} ({})", project.name(), project.path().display());
//!
//!     if let Some(debug) = project.find_configuration("Debug") {
//!         println!("  toolchain: {:?}", debug.toolchain);
//!     }
//!
//!     if let Err(e) = project.reload() {
//!         eprintln!("keeping last good state: {}", e);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod project;
pub mod xml;

pub use error::ProjectError;

/// Default path constants for ewproj files.
pub mod paths {
    /// Project-local configuration file: `.ewproj/config.md`
    pub const PROJECT_CONFIG: &str = ".ewproj/config.md";
}
