use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for build
/// tooling.
///
/// - `Success` (0): Command completed successfully, no errors found
/// - `Failure` (1): Command completed but found verification errors
/// - `Error` (2): Command failed due to internal error (resolution, merge,
///   validation, or generation failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no errors found.
    Success,
    /// Command completed but found verification errors.
    Failure,
    /// Command failed due to internal error (parse error, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
