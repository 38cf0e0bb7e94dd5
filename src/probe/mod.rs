pub mod known;

pub use known::KnownTool;

use std::ffi::OsStr;

use regex::Regex;
use tracing::debug;

use crate::error::ProbeError;

/// A single version probe: a tool name plus the flag that makes it print
/// version information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSpec {
    pub name: String,
    pub version_arg: String,
}

/// What a probe produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The tool ran and its output contained a recognizable version fragment.
    Found(String),
    /// Anything else: tool missing, spawn error, non-UTF-8 output, no match.
    Unknown,
}

impl ProbeSpec {
    /// Probe with the default `--version` flag.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_arg(name, "--version")
    }

    /// Probe with an explicit flag, for tools that only reveal their version
    /// elsewhere (e.g. in `--help` text).
    pub fn with_arg(name: impl Into<String>, version_arg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_arg: version_arg.into(),
        }
    }

    /// Run the probe. Every failure mode maps to `Unknown`.
    pub fn run(&self) -> ProbeOutcome {
        match probe_command(self.name.as_ref(), &self.name, &self.version_arg) {
            Ok(version) => ProbeOutcome::Found(version),
            Err(e) => {
                debug!(tool = %self.name, error = %e, "probe failed");
                ProbeOutcome::Unknown
            }
        }
    }
}

/// Check whether a command is available on `$PATH`.
///
/// Uses the `which` crate for pure-Rust PATH resolution. No shell spawning.
/// Returns `false` if the command is not found or the lookup itself fails.
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

impl ProbeOutcome {
    /// Render the outcome the way the probe commands print it:
    /// `<tool> version <text>` when found, `?` otherwise.
    pub fn render(&self, tool: &str) -> String {
        match self {
            ProbeOutcome::Found(version) => format!("{} version {}", tool, version),
            ProbeOutcome::Unknown => "?".to_string(),
        }
    }
}

/// Spawn `program version_arg`, merge stdout and stderr, and extract the
/// version fragment that follows `name` in the output.
///
/// `program` and `name` are separate so tests can point at a stub executable;
/// `ProbeSpec::run` passes the same string for both. The child's exit status
/// is ignored: some tools exit non-zero from their version flag but still
/// print usable text.
fn probe_command(program: &OsStr, name: &str, version_arg: &str) -> Result<String, ProbeError> {
    let output = std::process::Command::new(program)
        .arg(version_arg)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()?;

    // Some tools print version info to stderr, so search both streams.
    let mut combined = String::from_utf8(output.stdout)?;
    combined.push_str(&String::from_utf8(output.stderr)?);

    extract_version(name, &combined)
}

/// Find `<name> (Version:)?<rest-of-line>` in `text` and return the trimmed
/// remainder.
///
/// The name must appear verbatim: tools that print a localized or
/// differently-cased name are reported as unknown.
fn extract_version(name: &str, text: &str) -> Result<String, ProbeError> {
    let pattern = format!("{} (Version:)?(.*)", regex::escape(name));
    let re = Regex::new(&pattern).map_err(|_| ProbeError::NoMatch)?;

    let version = re
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(ProbeError::NoMatch)?;

    Ok(version)
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
