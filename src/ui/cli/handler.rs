// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::extractor::SymbolExtractor;
use crate::output::write_symbols;
use crate::symbol::SymbolSet;
use crate::ui::report;
use anyhow::Context;
use colored::Colorize;
use std::io::{self, Write};

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args);

        let config = args.to_config();
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        let extractor = SymbolExtractor::from_config(&config);
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run(&config, &extractor, &mut stdout.lock(), &mut stderr.lock())?;
        Ok(())
    }

    fn setup_logging(&self, args: &Args) {
        // A second init only happens in-process (tests); keep the first logger.
        let _ = env_logger::Builder::new()
            .filter_level(args.level_filter())
            .format_timestamp(None)
            .try_init();
    }

    /// Dumper failures become an empty set plus a diagnostic on `err`; a write failure is returned.
    pub fn run<W: Write, E: Write>(
        &self,
        config: &Config,
        extractor: &SymbolExtractor,
        out: &mut W,
        err: &mut E,
    ) -> anyhow::Result<usize> {
        log::info!("Extracting symbols from {} ({})", config.library_path.display(), config.platform);

        let symbols = match extractor.extract(&config.library_path) {
            Ok(symbols) => symbols,
            Err(e) if e.is_recoverable() => {
                log::debug!("Continuing with an empty symbol list");
                writeln!(err, "{} {}", "[!]".red(), e)?;
                SymbolSet::new()
            }
            Err(e) => return Err(e.into()),
        };

        self.save(config, &symbols, out)
    }

    /// Verbose summary, the output file, then the confirmation line once the write succeeded.
    pub fn save<W: Write>(&self, config: &Config, symbols: &SymbolSet, out: &mut W) -> anyhow::Result<usize> {
        if config.verbose {
            report::write_summary(out, &config.library_path, symbols)?;
        }

        write_symbols(&config.output_file, symbols)
            .with_context(|| format!("could not save symbols to {}", config.output_file.display()))?;

        report::write_saved(out, symbols.len(), &config.output_file)?;
        Ok(symbols.len())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
