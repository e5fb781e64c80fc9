// Tue Jan 13 2026 - Alex

use crate::symbol::demangle::demangle_changed;

/// Prefixes of the C++ mangling schemes: GNU/Clang, MSVC, and Itanium with the
/// extra leading underscore Mach-O adds.
pub const MANGLED_PREFIXES: [&str; 3] = ["_Z", "??", "__Z"];

pub fn is_mangled_prefix(name: &str) -> bool {
    MANGLED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Why a name was classified as mangled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mangling {
    Prefix,
    Demangled(String),
}

/// Pure classification; `None` means the name is treated as unmangled.
pub fn classify(name: &str) -> Option<Mangling> {
    if is_mangled_prefix(name) {
        return Some(Mangling::Prefix);
    }
    demangle_changed(name).map(Mangling::Demangled)
}

/// Keeps or drops candidates depending on whether mangled names are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct MangledFilter {
    ignore_mangled: bool,
}

impl MangledFilter {
    pub fn new(ignore_mangled: bool) -> Self {
        Self { ignore_mangled }
    }

    pub fn ignores_mangled(&self) -> bool {
        self.ignore_mangled
    }

    pub fn should_include(&self, name: &str) -> bool {
        if !self.ignore_mangled {
            return true;
        }

        match classify(name) {
            Some(Mangling::Prefix) => {
                log::trace!("Dropping {}: mangled prefix", name);
                false
            }
            Some(Mangling::Demangled(demangled)) => {
                log::trace!("Dropping {}: demangles to {}", name, demangled);
                false
            }
            None => true,
        }
    }
}
