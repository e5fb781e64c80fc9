// Tue Jan 13 2026 - Alex

use crate::platform::Platform;
use crate::symbol::SymbolError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs the platform symbol dumper against a library and captures its stdout.
pub struct SymbolLister {
    platform: Platform,
    program: String,
}

impl SymbolLister {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            program: platform.tool().to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Blocks until the dumper exits. The library path is handed over unchecked.
    pub fn list(&self, library: &Path) -> Result<String, SymbolError> {
        log::debug!("Running {} {} {}", self.program, self.platform.tool_flag(), library.display());

        let output = Command::new(&self.program)
            .arg(self.platform.tool_flag())
            .arg(library)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| SymbolError::ToolLaunch {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SymbolError::ToolFailed {
                tool: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::trace!("{} produced {} bytes", self.program, stdout.len());
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_follows_platform() {
        assert_eq!(SymbolLister::new(Platform::Unix).program(), "nm");
        assert_eq!(SymbolLister::new(Platform::Windows).program(), "dumpbin");
    }

    #[test]
    fn test_missing_tool_is_launch_error() {
        let lister = SymbolLister::new(Platform::Unix)
            .with_program("symbol-extractor-no-such-dumper");
        let err = lister.list(Path::new("libmissing.a")).unwrap_err();

        assert!(matches!(err, SymbolError::ToolLaunch { .. }));
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("symbol-extractor-no-such-dumper"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_tool_failure() {
        // `false` ignores its arguments and exits with status 1.
        let lister = SymbolLister::new(Platform::Unix).with_program("false");
        let err = lister.list(Path::new("libmissing.a")).unwrap_err();

        assert!(matches!(err, SymbolError::ToolFailed { .. }));
        assert!(err.is_recoverable());
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        // `echo -g lib.a` prints its arguments back.
        let lister = SymbolLister::new(Platform::Unix).with_program("echo");
        let out = lister.list(Path::new("lib.a")).unwrap();

        assert_eq!(out.trim(), "-g lib.a");
    }
}
