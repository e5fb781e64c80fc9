// Tue Jan 13 2026 - Alex

pub mod classifier;
pub mod demangle;
pub mod error;
pub mod lister;
pub mod parser;

pub use classifier::{classify, is_mangled_prefix, MangledFilter, Mangling};
pub use demangle::try_demangle;
pub use error::SymbolError;
pub use lister::SymbolLister;
pub use parser::SymbolParser;

use std::collections::BTreeSet;

/// Deduplicated names, iterated in byte order.
pub type SymbolSet = BTreeSet<String>;
