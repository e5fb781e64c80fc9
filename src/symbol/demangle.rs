// Tue Jan 13 2026 - Alex

use cpp_demangle::{DemangleOptions, Symbol};

/// Decodes an Itanium C++ name. Anything the grammar rejects yields `None`.
pub fn try_demangle(name: &str) -> Option<String> {
    let symbol = Symbol::new(name).ok()?;
    symbol.demangle(&DemangleOptions::default()).ok()
}

/// Demangled text only when it actually differs from the input.
pub fn demangle_changed(name: &str) -> Option<String> {
    try_demangle(name).filter(|demangled| demangled != name)
}
