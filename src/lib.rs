// Tue Jan 15 2026 - Alex

pub mod config;
pub mod extractor;
pub mod output;
pub mod platform;
pub mod symbol;
pub mod ui;

pub use config::Config;
pub use extractor::SymbolExtractor;
pub use platform::Platform;
pub use symbol::{MangledFilter, SymbolError, SymbolSet};
