//! Per-shape section parsing strategies.
//!
//! | Strategy              | Sections                                          |
//! |-----------------------|---------------------------------------------------|
//! | [`GeneralParser`]     | key/value blocks (Exception, Computer, ...)       |
//! | [`TableParser`]       | Modules Information, Processes Information        |
//! | [`CallStackParser`]   | Call Stack Information                            |
//! | [`NetworkParser`]     | Network (one row per attribute, one column per NIC)|

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParseOptions;
use crate::record::ParsedSection;
use crate::schema::{Section, SectionSchema};

pub mod call_stack;
pub mod general;
pub mod network;
pub mod table;

pub use call_stack::{CallStackParser, Phase};
pub use general::GeneralParser;
pub use network::NetworkParser;
pub use table::TableParser;

/// `  2.5 Type : EAccessViolation` -> ordinal, label, colon, value.
static DATA_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[\d.]+\s+(?P<attribute>.*?)\s*:\s*(?P<data>.*)$")
        .expect("valid data line pattern")
});

/// Splits a numbered `label : value` line. Returns `None` for any other shape.
pub fn split_data_line(line: &str) -> Option<(&str, &str)> {
    let captures = DATA_LINE.captures(line)?;
    let attribute = captures.name("attribute")?.as_str();
    let data = captures.name("data").map_or("", |m| m.as_str());
    Some((attribute, data))
}

/// Turns the raw lines of one section into its typed form.
pub trait SectionParser: Send + Sync {
    fn parse(&self, schema: &SectionSchema, lines: &[String], options: &ParseOptions)
    -> ParsedSection;
}

/// Dispatch table from section to parsing strategy.
pub struct ParserRegistry {
    map: HashMap<Section, Box<dyn SectionParser>>,
}

impl ParserRegistry {
    /// A registry with no strategies at all.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn register(&mut self, section: Section, parser: impl SectionParser + 'static) {
        self.map.insert(section, Box::new(parser));
    }

    pub fn unregister(&mut self, section: Section) -> Option<Box<dyn SectionParser>> {
        self.map.remove(&section)
    }

    pub fn select(&self, section: Section) -> Option<&dyn SectionParser> {
        self.map.get(&section).map(|p| &**p)
    }

    pub fn parser_count(&self) -> usize {
        self.map.len()
    }

    /// Registered sections in registry order.
    pub fn registered_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.map.contains_key(s))
            .collect()
    }
}

impl Default for ParserRegistry {
    /// Registers the built-in strategy for every known section.
    fn default() -> Self {
        let mut registry = Self::empty();
        for section in Section::ALL {
            match section {
                Section::CallStackInformation => registry.register(section, CallStackParser),
                Section::ModulesInformation | Section::ProcessesInformation => {
                    registry.register(section, TableParser)
                }
                Section::Network => registry.register(section, NetworkParser),
                Section::Application
                | Section::Exception
                | Section::User
                | Section::ActiveControls
                | Section::Computer
                | Section::OperatingSystem
                | Section::AssemblerInformation
                | Section::Registers => registry.register(section, GeneralParser),
            }
        }
        registry
    }
}
