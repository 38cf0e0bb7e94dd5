mod cli;
mod error;
mod probe;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Bare `covprobe` probes gcovr, matching how build scripts invoke it.
    match cli.command {
        None => cli::gcovr::run(cli::gcovr::Args::default()),
        Some(Command::Gcovr(args)) => cli::gcovr::run(args),
        Some(Command::Opencppcoverage(args)) => cli::opencppcoverage::run(args),
        Some(Command::Tool(args)) => cli::tool::run(args),
        Some(Command::Report(args)) => cli::report::run(args),
    }
}
