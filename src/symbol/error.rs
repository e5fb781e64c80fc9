// Tue Jan 13 2026 - Alex

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("Failed to run {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SymbolError {
    /// Dumper failures degrade to an empty symbol list; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SymbolError::ToolLaunch { .. } | SymbolError::ToolFailed { .. })
    }
}
