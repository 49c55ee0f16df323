use crate::config::ParseOptions;
use crate::record::{ParsedSection, Record};
use crate::schema::SectionSchema;

use super::{SectionParser, split_data_line};

/// Placeholder the report prints for an interface that has no value.
const EMPTY_CELL: &str = "-";

/// Parser for the Network section.
///
/// The report lays the table out sideways: one line per attribute, one column per
/// interface. The result is transposed back to one record per interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkParser;

impl SectionParser for NetworkParser {
    fn parse(
        &self,
        schema: &SectionSchema,
        lines: &[String],
        _options: &ParseOptions,
    ) -> ParsedSection {
        let mut columns: Vec<(String, Vec<String>)> = Vec::new();
        let mut interface_count = 0;

        for line in lines {
            let Some((label, data)) = split_data_line(line) else {
                continue;
            };
            let values: Vec<String> = data
                .split_whitespace()
                .filter(|token| *token != EMPTY_CELL)
                .map(str::to_string)
                .collect();
            interface_count = values.len();

            let field = schema.sanitize(label);
            match columns.iter_mut().find(|(name, _)| *name == field) {
                Some(column) => column.1 = values,
                None => columns.push((field, values)),
            }
        }

        if columns.iter().any(|(_, values)| values.len() != interface_count) {
            log::warn!(
                "{}: attribute rows differ in length; using {} interface(s) from the last row",
                schema.name(),
                interface_count
            );
        }

        let interfaces = (0..interface_count)
            .map(|index| {
                let mut record = Record::empty(schema);
                for (field, values) in &columns {
                    if let Some(value) = values.get(index) {
                        if !record.set(field, value.as_str()) {
                            log::debug!("{}: dropping unknown attribute '{}'", schema.name(), field);
                        }
                    }
                }
                record
            })
            .collect();

        ParsedSection::Table(interfaces)
    }
}
