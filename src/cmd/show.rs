//! Display of a single project and its configurations

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use ewproj::project::{Configuration, ProjectDocument};

use super::{describe, load_config, wants_json};

pub fn cmd_show(file: &Path, configuration: Option<&str>, json: bool) -> Result<()> {
    let config = load_config()?;

    let project = ProjectDocument::open(file).map_err(|e| anyhow::anyhow!(describe(&e)))?;

    let selected: Vec<Configuration> = match configuration {
        Some(name) => {
            let found = project.find_configuration(name).with_context(|| {
                format!(
                    "Configuration '{}' not found in {}. Available: {}",
                    name,
                    project.name(),
                    available_names(&project)
                )
            })?;
            vec![found]
        }
        None => project.configurations().to_vec(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if wants_json(json, &config) {
        let value = serde_json::json!({
            "name": project.name(),
            "path": project.path(),
            "configurations": selected,
        });
        serde_json::to_writer_pretty(&mut out, &value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}  {}", project.name().bold(), project.path().display())?;
        for configuration in &selected {
            write_configuration(&mut out, configuration)?;
        }
    }

    Ok(())
}

fn available_names(project: &ProjectDocument) -> String {
    let names: Vec<String> = project
        .configurations()
        .iter()
        .map(|c| c.name.clone())
        .collect();

    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

fn write_configuration<W: Write>(out: &mut W, configuration: &Configuration) -> Result<()> {
    let mut heading = configuration.name.cyan().bold().to_string();
    if let Some(toolchain) = &configuration.toolchain {
        heading.push_str(&format!(" [{}]", toolchain));
    }
    if configuration.debug {
        heading.push_str(" (debug)");
    }
    writeln!(out, "  {}", heading)?;

    if !configuration.defines.is_empty() {
        writeln!(out, "    defines:")?;
        for define in &configuration.defines {
            match &define.value {
                Some(value) => writeln!(out, "      {}={}", define.identifier, value)?,
                None => writeln!(out, "      {}", define.identifier)?,
            }
        }
    }

    if !configuration.include_paths.is_empty() {
        writeln!(out, "    include paths:")?;
        for path in &configuration.include_paths {
            writeln!(out, "      {}", path.display())?;
        }
    }

    if !configuration.pre_includes.is_empty() {
        writeln!(out, "    pre-includes:")?;
        for path in &configuration.pre_includes {
            writeln!(out, "      {}", path.display())?;
        }
    }

    Ok(())
}
