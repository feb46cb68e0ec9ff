//! CLI argument definitions for ewproj.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ewproj")]
#[command(version)]
#[command(about = "Inspect IAR Embedded Workbench project files", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    ewproj list firmware/            Find every project under firmware/\n    ewproj show app.ewp -c Debug     Show one configuration\n    ewproj check *.ewp               Validate project files"
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects found under a directory
    List {
        /// Directory to scan (defaults to the current directory)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Only look at files directly inside DIR
        #[arg(long)]
        no_recursive: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also print files that were skipped and why
        #[arg(long)]
        verbose_skips: bool,
    },
    /// Show the configurations of one project file
    Show {
        /// Path to the .ewp file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Only show the configuration with this exact name
        #[arg(short, long, value_name = "NAME")]
        configuration: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check that project files load, exiting non-zero on failure
    Check {
        /// Paths to .ewp files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the effective configuration
    Config,
    /// Show version information
    Version {
        /// Show commit and build date
        #[arg(long)]
        verbose: bool,
    },
}
