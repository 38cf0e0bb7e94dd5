use thiserror::Error;

/// Reasons a version probe can fail.
///
/// Internal only: every variant collapses to [`crate::probe::ProbeOutcome::Unknown`]
/// before it reaches a caller, so probe commands never distinguish causes.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to spawn tool: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("tool output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("no version pattern found in tool output")]
    NoMatch,
}
