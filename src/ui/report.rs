// Wed Jan 15 2026 - Alex

use crate::symbol::SymbolSet;
use std::io::{self, Write};
use std::path::Path;

pub const SAMPLE_LIMIT: usize = 5;

/// Verbose run summary: library, count, and the first few names.
pub fn write_summary<W: Write>(out: &mut W, library: &Path, symbols: &SymbolSet) -> io::Result<()> {
    writeln!(out, "Processing library: {}", library.display())?;
    writeln!(out, "Found {} symbols after filtering", symbols.len())?;

    if !symbols.is_empty() {
        writeln!(out)?;
        writeln!(out, "Sample symbols:")?;
        for symbol in symbols.iter().take(SAMPLE_LIMIT) {
            writeln!(out, "  {}", symbol)?;
        }
        if symbols.len() > SAMPLE_LIMIT {
            writeln!(out, "  ...")?;
        }
    }

    Ok(())
}

pub fn write_saved<W: Write>(out: &mut W, count: usize, output_file: &Path) -> io::Result<()> {
    writeln!(out, "Saved {} symbols to {}", count, output_file.display())
}
