//! Best-effort construction of projects from paths and directories.

use std::path::{Path, PathBuf};

use super::document::ProjectDocument;
use crate::error::ProjectError;
use crate::locator::ProjectFileLocator;

/// Open a project, returning `None` for anything that is not a loadable
/// project file.
pub fn create_project_from(path: &Path) -> Option<ProjectDocument> {
    if !path.is_file() {
        return None;
    }

    match ProjectDocument::open(path) {
        Ok(project) => Some(project),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Skipping project file");
            None
        }
    }
}

/// Every loadable `.ewp` project under `directory`.
///
/// Files that fail to load are left out. An empty or missing directory gives
/// an empty list.
pub fn create_projects_from(directory: &Path, recursive: bool) -> Vec<ProjectDocument> {
    create_projects_with(&ProjectFileLocator::default(), directory, recursive, |_, _| {})
}

/// Like [`create_projects_from`], with a custom locator and a callback told
/// about every candidate that was skipped and why.
pub fn create_projects_with<F>(
    locator: &ProjectFileLocator,
    directory: &Path,
    recursive: bool,
    mut on_skip: F,
) -> Vec<ProjectDocument>
where
    F: FnMut(&Path, &ProjectError),
{
    let candidates = locator.locate(directory, recursive);

    collect_best_effort(candidates, |path| ProjectDocument::open(path), |path, e| {
        tracing::debug!(path = %path.display(), error = %e, "Skipping project file");
        on_skip(path, e);
    })
}

/// Run `construct` over each candidate in order, keeping the successes and
/// reporting each failure to `on_skip`.
pub fn collect_best_effort<T, E, C, S>(
    candidates: Vec<PathBuf>,
    mut construct: C,
    mut on_skip: S,
) -> Vec<T>
where
    C: FnMut(&Path) -> Result<T, E>,
    S: FnMut(&Path, &E),
{
    candidates
        .iter()
        .filter_map(|path| match construct(path.as_path()) {
            Ok(item) => Some(item),
            Err(e) => {
                on_skip(path.as_path(), &e);
                None
            }
        })
        .collect()
}
