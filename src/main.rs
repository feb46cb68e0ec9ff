//! CLI entry point for ewproj.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

/// Initialize tracing on stderr so stdout stays clean for listings and JSON
fn init_tracing(debug: bool) {
    let default_filter = if debug { "ewproj=debug" } else { "ewproj=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::List {
            dir,
            no_recursive,
            json,
            verbose_skips,
        } => cmd::list::cmd_list(dir.as_deref(), no_recursive, json, verbose_skips),
        Commands::Show {
            file,
            configuration,
            json,
        } => cmd::show::cmd_show(&file, configuration.as_deref(), json),
        Commands::Check { files } => cmd::check::cmd_check(&files),
        Commands::Config => cmd::config::cmd_config(),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
    }
}
