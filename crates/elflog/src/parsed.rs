//! Read-only view over one parsed report.

use serde::Serialize;
use serde::ser::Serializer;

use crate::error::{ElfError, Result};
use crate::record::{CallStack, ParsedSection, Record};
use crate::schema::{Section, canonical_name};
use crate::segmenter::{RawSection, RawSections};

/// Parsed sections keyed by canonical section name, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    entries: Vec<(Section, ParsedSection)>,
}

impl ParsedSections {
    pub(crate) fn insert(&mut self, section: Section, parsed: ParsedSection) {
        self.entries.push((section, parsed));
    }

    /// Looks up by canonical key (`call_stack_information`).
    pub fn get(&self, key: &str) -> Option<&ParsedSection> {
        self.entries
            .iter()
            .find(|(section, _)| section.key() == key)
            .map(|(_, parsed)| parsed)
    }

    pub fn get_section(&self, section: Section) -> Option<&ParsedSection> {
        self.entries
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, parsed)| parsed)
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|(section, _)| section.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &ParsedSection)> {
        self.entries.iter().map(|(section, parsed)| (*section, parsed))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParsedSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(section, parsed)| (section.key(), parsed)))
    }
}

/// Either view of one section.
///
/// A raw section serializes as its lines, the same value it has inside
/// [`SectionsView::Raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView<'a> {
    Raw(&'a RawSection),
    Parsed(&'a ParsedSection),
}

impl Serialize for SectionView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SectionView::Raw(raw) => raw.lines.serialize(serializer),
            SectionView::Parsed(parsed) => parsed.serialize(serializer),
        }
    }
}

/// Either view of the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionsView<'a> {
    Raw(&'a RawSections),
    Parsed(&'a ParsedSections),
}

/// The outcome of parsing one report: raw blocks and their typed forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLog {
    raw: RawSections,
    parsed: ParsedSections,
}

impl ParsedLog {
    pub(crate) fn new(raw: RawSections, parsed: ParsedSections) -> Self {
        Self { raw, parsed }
    }

    /// Names of the sections discovered in the input (`raw`) or successfully parsed.
    pub fn section_names(&self, raw: bool) -> Vec<String> {
        if raw {
            self.raw.names().map(str::to_string).collect()
        } else {
            self.parsed.keys().collect()
        }
    }

    /// Looks up a section by header text or canonical name, preferring an exact match.
    pub fn section(&self, name: &str, raw: bool) -> Result<SectionView<'_>> {
        if raw {
            self.raw_section(name).map(SectionView::Raw)
        } else {
            self.parsed_section(name).map(SectionView::Parsed)
        }
    }

    pub fn raw_section(&self, name: &str) -> Result<&RawSection> {
        if let Some(section) = self.raw.get(name) {
            return Ok(section);
        }
        let key = canonical_name(name);
        self.raw
            .iter()
            .find(|section| canonical_name(&section.name) == key)
            .ok_or_else(|| ElfError::SectionNotFound(name.to_string()))
    }

    pub fn parsed_section(&self, name: &str) -> Result<&ParsedSection> {
        self.parsed
            .get(name)
            .or_else(|| self.parsed.get(&canonical_name(name)))
            .ok_or_else(|| ElfError::SectionNotFound(name.to_string()))
    }

    pub fn all_sections(&self, raw: bool) -> SectionsView<'_> {
        if raw {
            SectionsView::Raw(&self.raw)
        } else {
            SectionsView::Parsed(&self.parsed)
        }
    }

    pub fn raw_sections(&self) -> &RawSections {
        &self.raw
    }

    pub fn parsed_sections(&self) -> &ParsedSections {
        &self.parsed
    }

    /// The call-stack summary and frames.
    pub fn call_stack(&self) -> Result<&CallStack> {
        let name = Section::CallStackInformation.heading();
        self.parsed_section(name)?
            .as_call_stack()
            .ok_or_else(|| ElfError::SectionNotFound(name.to_string()))
    }

    /// The Exception block.
    pub fn exception(&self) -> Result<&Record> {
        self.record(Section::Exception)
    }

    /// The single record of a key/value section.
    pub fn record(&self, section: Section) -> Result<&Record> {
        self.parsed
            .get_section(section)
            .and_then(ParsedSection::as_record)
            .ok_or_else(|| ElfError::SectionNotFound(section.heading().to_string()))
    }

    /// The rows of a table-shaped section (Modules, Processes, Network).
    pub fn table(&self, section: Section) -> Result<&[Record]> {
        self.parsed
            .get_section(section)
            .and_then(ParsedSection::as_table)
            .ok_or_else(|| ElfError::SectionNotFound(section.heading().to_string()))
    }
}
