use std::path::Path;

use crate::config::ParseOptions;
use crate::error::{ElfError, Result};
use crate::parsed::{ParsedLog, ParsedSections};
use crate::schema::{SCHEMAS, Section};
use crate::sections::ParserRegistry;
use crate::segmenter::segment;
use crate::source::{read_lines, split_stream};

/// Runs the full pipeline: segmentation, then one strategy per known section.
///
/// A parser holds no per-report state, so one instance can serve any number of reports,
/// including from several threads at once.
pub struct ElfParser {
    options: ParseOptions,
    registry: ParserRegistry,
}

impl Default for ElfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ElfParser {
    /// A parser with default options and every built-in strategy.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
            registry: ParserRegistry::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a report file from disk.
    pub fn parse_path(&self, path: &Path) -> Result<ParsedLog> {
        let lines = read_lines(path)?;
        log::debug!("Read {} lines from {:?}", lines.len(), path);
        Ok(self.parse_lines(lines))
    }

    /// Parses an escaped attachment buffer prefixed by transport framing.
    pub fn parse_stream(&self, buffer: &[u8]) -> Result<ParsedLog> {
        let lines = split_stream(buffer, &self.options.anchor)?;
        Ok(self.parse_lines(lines))
    }

    /// Parses from whichever source is supplied, preferring the file path.
    pub fn parse_source(&self, path: Option<&Path>, content: Option<&[u8]>) -> Result<ParsedLog> {
        match (path, content) {
            (Some(path), _) => self.parse_path(path),
            (None, Some(content)) if !content.is_empty() => self.parse_stream(content),
            _ => Err(ElfError::UnparsableInput(
                "no log file name or contents provided".to_string(),
            )),
        }
    }

    /// Parses already-split lines.
    pub fn parse_lines<I, S>(&self, lines: I) -> ParsedLog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = segment(lines);
        let mut parsed = ParsedSections::default();

        for section in Section::ALL {
            let Some(parser) = self.registry.select(section) else {
                log::warn!("{}", ElfError::UnknownSectionHandler(section.heading().to_string()));
                continue;
            };
            let Some(raw_section) = raw.get(section.heading()) else {
                log::debug!("Section '{}' not present in log", section);
                continue;
            };
            let schema = SCHEMAS.get(section);
            parsed.insert(
                section,
                parser.parse(schema, &raw_section.lines, &self.options),
            );
        }

        ParsedLog::new(raw, parsed)
    }

    /// Parses a whole report held in memory as ordinary text.
    pub fn parse(&self, input: &str) -> ParsedLog {
        self.parse_lines(input.lines())
    }
}
