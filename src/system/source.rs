use std::error::Error;
use std::fmt;

use super::snapshot::{MetricsSnapshot, ProcessEntry};

/// Errors a data source can surface to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Data source unreachable or returned a malformed response.
    Transport(String),
    /// Process no longer exists when a kill was attempted.
    NotFound(u32),
    /// Kill denied by the OS.
    PermissionDenied(u32),
    /// External tool could not be started.
    Launch(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Transport(msg) => write!(f, "metrics source unavailable: {msg}"),
            SourceError::NotFound(pid) => write!(f, "process {pid} not found"),
            SourceError::PermissionDenied(pid) => {
                write!(f, "permission denied killing process {pid}")
            }
            SourceError::Launch(msg) => write!(f, "failed to launch tool: {msg}"),
        }
    }
}

impl Error for SourceError {}

/// The backend capability the engine polls.
///
/// The engine only ever talks to this trait; the sysinfo-backed collector is
/// one implementation, mock sources in tests are another.
pub trait MetricsSource {
    fn fetch_metrics(&mut self) -> Result<MetricsSnapshot, SourceError>;
    fn fetch_processes(&mut self) -> Result<Vec<ProcessEntry>, SourceError>;
    fn terminate_process(&mut self, pid: u32) -> Result<(), SourceError>;
    fn launch_terminal(&mut self) -> Result<(), SourceError>;
    fn launch_file_manager(&mut self) -> Result<(), SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_pid() {
        assert_eq!(
            SourceError::NotFound(42).to_string(),
            "process 42 not found"
        );
        assert_eq!(
            SourceError::PermissionDenied(1).to_string(),
            "permission denied killing process 1"
        );
    }
}
