pub mod gcovr;
pub mod opencppcoverage;
pub mod output;
pub mod report;
pub mod tool;

use clap::{Parser, Subcommand};

/// Coverage-tool version probe for build scripts
#[derive(Parser)]
#[command(name = "covprobe", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report the installed gcovr version
    Gcovr(gcovr::Args),

    /// Report the installed OpenCppCoverage version
    Opencppcoverage(opencppcoverage::Args),

    /// Probe an arbitrary tool for its version
    Tool(tool::Args),

    /// Probe every known coverage tool and print a diagnostic report
    Report(report::Args),
}
