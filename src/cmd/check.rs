//! Strict validation of explicitly named project files

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ewproj::project::ProjectDocument;

use super::{describe, load_config};

pub fn cmd_check(files: &[PathBuf]) -> Result<()> {
    load_config()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let failed = check_files(&mut out, files)?;

    if failed > 0 {
        anyhow::bail!("{} of {} project files failed to load", failed, files.len());
    }

    Ok(())
}

/// Open each file, print one line per file, and return how many failed.
fn check_files<W: Write>(out: &mut W, files: &[PathBuf]) -> Result<usize> {
    let mut failed = 0;

    for file in files {
        match ProjectDocument::open(file.as_path()) {
            Ok(project) => {
                writeln!(
                    out,
                    "{} {} ({} configurations)",
                    "✓".green(),
                    file.display(),
                    project.configurations().len()
                )?;
            }
            Err(e) => {
                failed += 1;
                writeln!(out, "{} {}", "✗".red(), failure_line(file, &describe(&e)))?;
            }
        }
    }

    Ok(failed)
}

fn failure_line(file: &Path, reason: &str) -> String {
    format!("{}: {}", file.display(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_files_counts_failures() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.ewp");
        let bad = tmp.path().join("bad.ewp");
        let missing = tmp.path().join("missing.ewp");
        fs::write(
            &good,
            "<project><configuration><name>Debug</name></configuration></project>",
        )
        .unwrap();
        fs::write(&bad, "<workspace/>").unwrap();

        let mut out = Vec::new();
        let failed = check_files(&mut out, &[good, bad, missing]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(failed, 2);
        assert!(text.contains("(1 configurations)"));
        assert!(text.contains("found 'workspace'"));
        assert!(text.contains("is not a file"));
    }
}
