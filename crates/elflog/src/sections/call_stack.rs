use crate::config::ParseOptions;
use crate::record::{CallStack, ParsedSection, Record};
use crate::schema::SectionSchema;

use super::SectionParser;

/// Position within the call-stack section.
///
/// The section reuses one divider glyph between its parts, so each divider line moves to
/// the next part:
///
/// ```text
/// (Preamble)
/// ------------------------
/// |Methods |Details |...|    <- column titles (Header)
/// |----------------------|
/// |*Exception Thread: ...|   <- thread summary (Summary)
/// |----------------------|
/// |7FFFFFFE|03 |...|         <- frames (Table)
/// ------------------------   <- closing divider, still Table
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Preamble,
    Header,
    Summary,
    Table,
}

impl Phase {
    /// Transition taken on each divider line.
    pub fn advance(self) -> Self {
        match self {
            Phase::Preamble => Phase::Header,
            Phase::Header => Phase::Summary,
            Phase::Summary | Phase::Table => Phase::Table,
        }
    }
}

/// Parser for the Call Stack Information section.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallStackParser;

impl CallStackParser {
    /// Parses into the composite summary and frame list.
    pub fn parse_stack(
        &self,
        schema: &SectionSchema,
        lines: &[String],
        options: &ParseOptions,
    ) -> CallStack {
        let delimiter = options.column_delimiter;
        let trim_cell = |s: &str| s.trim_matches(|c: char| c == ' ' || c == delimiter).to_string();

        let mut stack = CallStack::default();
        let mut phase = Phase::default();

        for line in lines {
            if options.is_table_delimiter(line.trim_start()) {
                phase = phase.advance();
                continue;
            }

            match phase {
                Phase::Preamble | Phase::Header => {}
                Phase::Summary => {
                    stack.summary.push_str(&trim_cell(line.as_str()));
                    stack.summary.push('\n');
                }
                Phase::Table => {
                    let cells: Vec<String> = line
                        .split(delimiter)
                        .filter(|cell| !cell.is_empty())
                        .map(trim_cell)
                        .collect();
                    if cells.is_empty() {
                        continue;
                    }
                    stack.frames.push(Record::from_positional(schema, cells));
                }
            }
        }

        stack
    }
}

impl SectionParser for CallStackParser {
    fn parse(
        &self,
        schema: &SectionSchema,
        lines: &[String],
        options: &ParseOptions,
    ) -> ParsedSection {
        ParsedSection::CallStack(self.parse_stack(schema, lines, options))
    }
}
