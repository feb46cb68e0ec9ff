use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::load_fixture;

/// TestHarness provides an isolated directory tree to drop project files into.
/// The directory doubles as `HOME` for CLI runs so no global config leaks in.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub ewproj_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");

        TestHarness {
            dir,
            ewproj_binary: PathBuf::from(env!("CARGO_BIN_EXE_ewproj")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the harness root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Copies a fixture from tests/fixtures to a path relative to the harness root.
    pub fn copy_fixture(&self, name: &str, relative: &str) -> PathBuf {
        self.write(relative, &load_fixture(name))
    }

    /// Writes `.ewproj/config.md` in the harness root.
    #[allow(dead_code)]
    pub fn with_config(&self, config_content: &str) -> PathBuf {
        self.write(".ewproj/config.md", config_content)
    }

    /// Executes the ewproj binary with the given arguments in the harness directory.
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        self.run_with_env(args, &[])
    }

    /// Like `run`, with extra environment variables applied last.
    #[allow(dead_code)]
    pub fn run_with_env(
        &self,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> std::io::Result<std::process::Output> {
        Command::new(&self.ewproj_binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .envs(envs.iter().copied())
            .output()
    }
}
