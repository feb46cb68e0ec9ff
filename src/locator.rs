//! Finding candidate project files on disk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// Extension of IAR Embedded Workbench project files, without the dot.
pub const PROJECT_EXTENSION: &str = "ewp";

/// Walk `root` and return every path accepted by `predicate`.
///
/// Only the direct entries of `root` are visited unless `recursive` is set.
/// Entries are visited in file-name order. Entries that cannot be read are
/// logged and skipped; a missing root yields nothing.
pub fn walk_and_find<F>(root: &Path, recursive: bool, predicate: F) -> Vec<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    walk_and_find_with(root, recursive, false, |_| true, predicate)
}

/// Walk like [`walk_and_find`], skipping the whole subtree of any directory
/// for which `descend` returns false.
fn walk_and_find_with<D, F>(
    root: &Path,
    recursive: bool,
    follow_links: bool,
    mut descend: D,
    mut predicate: F,
) -> Vec<PathBuf>
where
    D: FnMut(&Path) -> bool,
    F: FnMut(&Path) -> bool,
{
    let max_depth = if recursive { usize::MAX } else { 1 };

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !entry.file_type().is_dir() || descend(entry.path())
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| predicate(path.as_path()))
        .collect()
}

/// Decides which files under a directory are project files.
#[derive(Debug, Clone)]
pub struct ProjectFileLocator {
    extension: String,
    follow_links: bool,
    exclude: Vec<Pattern>,
}

impl Default for ProjectFileLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFileLocator {
    /// Locator for `.ewp` files, not following symlinked directories.
    pub fn new() -> Self {
        Self {
            extension: PROJECT_EXTENSION.to_string(),
            follow_links: false,
            exclude: Vec::new(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Skip paths matching any of these patterns, relative to the walk root.
    pub fn with_excludes(mut self, exclude: Vec<Pattern>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// A regular file (or a symlink to one) with exactly the project extension.
    pub fn is_project_file(&self, path: &Path) -> bool {
        path.is_file() && path.extension() == Some(OsStr::new(&self.extension))
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.exclude.iter().any(|p| p.matches_path(relative))
    }

    /// A directory is pruned when its own path, or its path with a trailing
    /// separator, matches an exclude pattern. `vendor/**` matches `vendor/`.
    fn is_excluded_dir(&self, root: &Path, dir: &Path) -> bool {
        let relative = dir.strip_prefix(root).unwrap_or(dir);
        let as_dir = relative.join("");
        self.exclude
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(&as_dir))
    }

    /// Candidate project files under `root`, in walk order. Excluded
    /// directories are not descended into.
    pub fn locate(&self, root: &Path, recursive: bool) -> Vec<PathBuf> {
        walk_and_find_with(
            root,
            recursive,
            self.follow_links,
            |dir| !self.is_excluded_dir(root, dir),
            |path| self.is_project_file(path) && !self.is_excluded(root, path),
        )
    }
}
