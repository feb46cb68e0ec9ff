//! Project discovery listing

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ewproj::project::{create_projects_with, ProjectDocument};

use super::{describe, load_config, wants_json};

/// One discovered project as printed by `ewproj list --json`.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub path: PathBuf,
    pub configurations: Vec<String>,
}

impl From<&ProjectDocument> for ProjectSummary {
    fn from(project: &ProjectDocument) -> Self {
        Self {
            name: project.name(),
            path: project.path().to_path_buf(),
            configurations: project
                .configurations()
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        }
    }
}

/// A candidate file that did not load.
#[derive(Debug, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

pub fn cmd_list(
    dir: Option<&Path>,
    no_recursive: bool,
    json: bool,
    verbose_skips: bool,
) -> Result<()> {
    let config = load_config()?;
    let root = dir.unwrap_or_else(|| Path::new("."));

    if !root.is_dir() {
        anyhow::bail!("'{}' is not a directory", root.display());
    }

    let recursive = config.discovery.recursive && !no_recursive;
    let locator = config.discovery.locator()?;

    let mut skipped = Vec::new();
    let projects = create_projects_with(&locator, root, recursive, |path, e| {
        skipped.push(SkippedFile {
            path: path.to_path_buf(),
            reason: describe(e),
        });
    });

    let summaries: Vec<ProjectSummary> = projects.iter().map(ProjectSummary::from).collect();
    let skipped = if verbose_skips { skipped } else { Vec::new() };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if wants_json(json, &config) {
        write_json(&mut out, &summaries, &skipped)?;
    } else {
        write_text(&mut out, &summaries, &skipped)?;
    }

    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    projects: &[ProjectSummary],
    skipped: &[SkippedFile],
) -> Result<()> {
    let value = if skipped.is_empty() {
        serde_json::to_value(projects)?
    } else {
        serde_json::json!({ "projects": projects, "skipped": skipped })
    };
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(
    out: &mut W,
    projects: &[ProjectSummary],
    skipped: &[SkippedFile],
) -> Result<()> {
    if projects.is_empty() {
        writeln!(out, "{}", "No projects found.".dimmed())?;
    }

    for project in projects {
        writeln!(
            out,
            "{}  {}",
            project.name.bold(),
            project.path.display().to_string().dimmed()
        )?;
        if project.configurations.is_empty() {
            writeln!(out, "    {}", "(no configurations)".dimmed())?;
        } else {
            writeln!(out, "    {}", project.configurations.join(", "))?;
        }
    }

    for file in skipped {
        writeln!(
            out,
            "{} {}: {}",
            "skipped".yellow(),
            file.path.display(),
            file.reason
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ProjectSummary {
        ProjectSummary {
            name: "app".to_string(),
            path: PathBuf::from("fw/app.ewp"),
            configurations: vec!["Debug".to_string(), "Release".to_string()],
        }
    }

    #[test]
    fn test_write_text_lists_configurations() {
        let mut out = Vec::new();
        write_text(&mut out, &[summary()], &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("app"));
        assert!(text.contains("fw/app.ewp"));
        assert!(text.contains("Debug, Release"));
        assert!(!text.contains("skipped"));
    }

    #[test]
    fn test_write_text_reports_skips() {
        let skipped = vec![SkippedFile {
            path: PathBuf::from("fw/bad.ewp"),
            reason: "malformed".to_string(),
        }];
        let mut out = Vec::new();
        write_text(&mut out, &[], &skipped).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No projects found."));
        assert!(text.contains("fw/bad.ewp: malformed"));
    }

    #[test]
    fn test_write_json_plain_array_without_skips() {
        let mut out = Vec::new();
        write_json(&mut out, &[summary()], &[]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "app");
        assert_eq!(value[0]["configurations"][1], "Release");
    }

    #[test]
    fn test_write_json_object_with_skips() {
        let skipped = vec![SkippedFile {
            path: PathBuf::from("bad.ewp"),
            reason: "boom".to_string(),
        }];
        let mut out = Vec::new();
        write_json(&mut out, &[summary()], &skipped).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["projects"][0]["name"], "app");
        assert_eq!(value["skipped"][0]["reason"], "boom");
    }
}
