// Tue Jan 13 2026 - Alex

use std::fmt;

/// Host family that decides which dumper runs and how its output is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn tool(&self) -> &'static str {
        match self {
            Platform::Unix => "nm",
            Platform::Windows => "dumpbin",
        }
    }

    /// Flag asking the dumper for the exported symbol table.
    pub fn tool_flag(&self) -> &'static str {
        match self {
            Platform::Unix => "-g",
            Platform::Windows => "/SYMBOLS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Unix => write!(f, "unix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}
