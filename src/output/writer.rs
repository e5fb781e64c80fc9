// Tue Jan 13 2026 - Alex

use crate::symbol::{SymbolError, SymbolSet};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One name per line, newline-terminated, in set order.
pub fn write_symbols_to<W: Write>(writer: &mut W, symbols: &SymbolSet) -> io::Result<()> {
    for symbol in symbols {
        writeln!(writer, "{}", symbol)?;
    }
    writer.flush()
}

/// Creates or truncates `path` and writes the sorted symbol list into it.
pub fn write_symbols(path: &Path, symbols: &SymbolSet) -> Result<(), SymbolError> {
    let wrap = |source| SymbolError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_symbols_to(&mut writer, symbols).map_err(wrap)?;

    log::debug!("Wrote {} symbols to {}", symbols.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn set(names: &[&str]) -> SymbolSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorted_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbols.txt");

        write_symbols(&path, &set(&["zeta", "Alpha", "beta", "_under"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Alpha\n_under\nbeta\nzeta\n");
    }

    #[test]
    fn test_empty_set_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        write_symbols(&path, &SymbolSet::new()).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbols.txt");
        fs::write(&path, "stale\nlines\nfrom\nbefore\n").unwrap();

        write_symbols(&path, &set(&["fresh"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_unwritable_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("symbols.txt");

        let err = write_symbols(&path, &set(&["a"])).unwrap_err();

        assert!(matches!(err, SymbolError::Write { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_symbols_to(&mut buf, &set(&["b", "a", "a"])).unwrap();
        assert_eq!(buf, b"a\nb\n");
    }
}
