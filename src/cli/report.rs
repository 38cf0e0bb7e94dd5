use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;

use crate::cli::output;
use crate::probe::{KnownTool, ProbeOutcome};

#[derive(ClapArgs)]
pub struct Args {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the report: a known tool, whether it is on PATH, and what the
/// version probe produced.
#[derive(Debug, Serialize)]
struct ToolReport {
    tool: KnownTool,
    command: &'static str,
    on_path: bool,
    version: Option<String>,
}

pub fn run(args: Args) -> Result<()> {
    let reports: Vec<ToolReport> = KnownTool::ALL
        .iter()
        .map(|tool| probe_tool(*tool))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    output::header("Coverage Tools");
    for report in &reports {
        match (&report.version, report.on_path) {
            (Some(version), _) => {
                output::success(&format!("{} version {}", report.command, version));
            }
            (None, true) => {
                output::warning(&format!(
                    "{} is on PATH but its version could not be read",
                    report.command
                ));
            }
            (None, false) => {
                output::error(&format!("{} not found", report.command));
            }
        }
        // The machine-readable line a calling build script greps for.
        println!("{}", outcome_of(report).render(report.command));
    }

    Ok(())
}

fn probe_tool(tool: KnownTool) -> ToolReport {
    let on_path = crate::probe::command_exists(tool.command());
    let version = match tool.spec().run() {
        ProbeOutcome::Found(version) => Some(version),
        ProbeOutcome::Unknown => None,
    };

    ToolReport {
        tool,
        command: tool.command(),
        on_path,
        version,
    }
}

fn outcome_of(report: &ToolReport) -> ProbeOutcome {
    match &report.version {
        Some(version) => ProbeOutcome::Found(version.clone()),
        None => ProbeOutcome::Unknown,
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
