// Wed Jan 15 2026 - Alex

pub mod cli;
pub mod report;

pub use cli::{Args, CommandHandler};
