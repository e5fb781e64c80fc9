// Tue Jan 13 2026 - Alex

use crate::platform::Platform;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub library_path: PathBuf,
    pub output_file: PathBuf,
    pub ignore_mangled: bool,
    pub verbose: bool,
    pub platform: Platform,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: PathBuf::new(),
            output_file: PathBuf::from("symbols.txt"),
            ignore_mangled: false,
            verbose: false,
            platform: Platform::host(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, library: PathBuf) -> Self {
        self.library_path = library;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = output;
        self
    }

    pub fn with_ignore_mangled(mut self, ignore: bool) -> Self {
        self.ignore_mangled = ignore;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Only checks that both paths were given; the library itself is left to the dumper.
    pub fn validate(&self) -> Result<(), String> {
        if self.library_path.as_os_str().is_empty() {
            return Err("library_path must be set".to_string());
        }
        if self.output_file.as_os_str().is_empty() {
            return Err("output_file must be set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert!(!config.ignore_mangled);
        assert!(!config.verbose);
        assert_eq!(config.platform, Platform::host());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_library(PathBuf::from("libfoo.a"))
            .with_output_file(PathBuf::from("out.txt"))
            .with_ignore_mangled(true)
            .with_platform(Platform::Windows);

        assert!(config.validate().is_ok());
        assert!(config.ignore_mangled);
        assert_eq!(config.platform, Platform::Windows);
    }

    #[test]
    fn test_nonexistent_library_is_not_checked() {
        let config = Config::new()
            .with_library(PathBuf::from("/no/such/lib.a"))
            .with_output_file(PathBuf::from("out.txt"));
        assert!(config.validate().is_ok());
    }
}
