use serde::{Deserialize, Serialize};

use super::ProbeSpec;

/// Coverage tools this crate knows how to probe out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownTool {
    Gcovr,
    OpenCppCoverage,
}

impl KnownTool {
    pub const ALL: [KnownTool; 2] = [KnownTool::Gcovr, KnownTool::OpenCppCoverage];

    /// The executable name as it appears on `$PATH`.
    pub fn command(&self) -> &'static str {
        match self {
            KnownTool::Gcovr => "gcovr",
            KnownTool::OpenCppCoverage => "OpenCppCoverage",
        }
    }

    /// The flag that makes the tool print its version. OpenCppCoverage has no
    /// dedicated version flag; its version appears in the `--help` text.
    pub fn version_arg(&self) -> &'static str {
        match self {
            KnownTool::Gcovr => "--version",
            KnownTool::OpenCppCoverage => "--help",
        }
    }

    pub fn spec(&self) -> ProbeSpec {
        ProbeSpec::with_arg(self.command(), self.version_arg())
    }
}

impl std::fmt::Display for KnownTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
