// Tue Jan 13 2026 - Alex

pub mod writer;

pub use writer::{write_symbols, write_symbols_to};
