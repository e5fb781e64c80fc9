// Tue Jan 13 2026 - Alex

use crate::platform::Platform;
use once_cell::sync::Lazy;
use regex::Regex;

// Address, then one of text/weak/data/bss, then the name. Other nm type codes are ignored.
static NM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]+ [TWDB] (\w+)").expect("nm line pattern is valid")
});

static DUMPBIN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"External\s+\|\s+(\w+)").expect("dumpbin line pattern is valid")
});

pub struct SymbolParser {
    platform: Platform,
}

impl SymbolParser {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn pattern(&self) -> &'static Regex {
        match self.platform {
            Platform::Unix => &*NM_LINE,
            Platform::Windows => &*DUMPBIN_LINE,
        }
    }

    /// Candidate name on a single dumper line, if the line carries one.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Candidates in line order. Headers, banners and local symbols fall through; duplicates are kept.
    pub fn parse<'a>(&'a self, output: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        output.lines().filter_map(move |line| self.parse_line(line))
    }
}
