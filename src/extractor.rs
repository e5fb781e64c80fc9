// Tue Jan 13 2026 - Alex

use crate::config::Config;
use crate::platform::Platform;
use crate::symbol::{MangledFilter, SymbolError, SymbolLister, SymbolParser, SymbolSet};
use std::path::Path;

/// list -> parse -> filter -> dedupe for a single library.
pub struct SymbolExtractor {
    lister: SymbolLister,
    parser: SymbolParser,
    filter: MangledFilter,
}

impl SymbolExtractor {
    pub fn new(platform: Platform, ignore_mangled: bool) -> Self {
        Self {
            lister: SymbolLister::new(platform),
            parser: SymbolParser::new(platform),
            filter: MangledFilter::new(ignore_mangled),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.platform, config.ignore_mangled)
    }

    pub fn with_lister(mut self, lister: SymbolLister) -> Self {
        self.lister = lister;
        self
    }

    pub fn lister(&self) -> &SymbolLister {
        &self.lister
    }

    /// Filters already captured dumper output into the final set.
    pub fn collect(&self, output: &str) -> SymbolSet {
        let mut candidates = 0usize;
        let symbols: SymbolSet = self
            .parser
            .parse(output)
            .inspect(|_| candidates += 1)
            .filter(|name| self.filter.should_include(name))
            .map(str::to_string)
            .collect();

        log::debug!(
            "{} candidates, {} unique symbols kept (ignore mangled: {})",
            candidates,
            symbols.len(),
            self.filter.ignores_mangled()
        );
        symbols
    }

    pub fn extract(&self, library: &Path) -> Result<SymbolSet, SymbolError> {
        let output = self.lister.list(library)?;
        Ok(self.collect(&output))
    }
}
