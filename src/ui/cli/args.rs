// Wed Jan 15 2026 - Alex

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "symbol-extractor")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Extract symbols from a static library", long_about = None)]
pub struct Args {
    #[arg(help = "Path to the static library")]
    pub library_path: PathBuf,

    #[arg(help = "Path to the output file")]
    pub output_file: PathBuf,

    #[arg(long, help = "Ignore C++ symbols (identified by name mangling)")]
    pub ignore_cpp: bool,

    #[arg(short, long, help = "Print verbose information about processed symbols")]
    pub verbose: bool,

    #[arg(long, default_value = "warn", help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: String,
}

impl Args {
    pub fn to_config(&self) -> Config {
        Config::new()
            .with_library(self.library_path.clone())
            .with_output_file(self.output_file.clone())
            .with_ignore_mangled(self.ignore_cpp)
            .with_verbose(self.verbose)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Warn,
        }
    }
}
