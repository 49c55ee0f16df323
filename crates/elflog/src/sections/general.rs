use crate::config::ParseOptions;
use crate::record::{ParsedSection, Record};
use crate::schema::SectionSchema;

use super::{SectionParser, split_data_line};

/// Parser for numbered `label : value` blocks, producing a single record.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralParser;

impl SectionParser for GeneralParser {
    fn parse(
        &self,
        schema: &SectionSchema,
        lines: &[String],
        _options: &ParseOptions,
    ) -> ParsedSection {
        let mut record = Record::empty(schema);

        // Section present but carrying no structured data (Registers, Assembler Information).
        if schema.fields().is_empty() {
            return ParsedSection::Single(record);
        }

        for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            let Some((label, value)) = split_data_line(line) else {
                continue;
            };
            let field = schema.sanitize(label);
            if !record.set(&field, value.trim()) {
                log::debug!("{}: dropping unknown attribute '{}'", schema.name(), field);
            }
        }

        ParsedSection::Single(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SCHEMAS, Section};

    fn parse(section: Section, lines: &[&str]) -> Record {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        match GeneralParser.parse(SCHEMAS.get(section), &lines, &ParseOptions::default()) {
            ParsedSection::Single(record) => record,
            other => panic!("Expected single record, got {:?}", other),
        }
    }

    #[test]
    fn test_exception_block() {
        let record = parse(
            Section::Exception,
            &[
                "----------------------",
                "  2.1 Date          : Mon, 11 May 2020 14:23:48 -0400",
                "  2.2 Address       : 0043D6F3",
                "  2.3 Module Name   : Project.exe",
                "  2.4 Module Version: 1.0.0.0",
                "  2.5 Type          : EAccessViolation",
                "  2.6 Message       : Access violation at address 0043D6F3.",
                "  2.7 ID            : 0A85",
                "  2.8 Count         : 1",
                "",
            ],
        );

        assert_eq!(record.get("date"), Some("Mon, 11 May 2020 14:23:48 -0400"));
        assert_eq!(record.get("module_version"), Some("1.0.0.0"));
        assert_eq!(record.get("type_"), Some("EAccessViolation"));
        assert_eq!(record.get("id_"), Some("0A85"));
        assert_eq!(record.get("sent"), None);
        assert_eq!(record.get("count"), None);
    }

    #[test]
    fn test_labels_with_punctuation() {
        let record = parse(
            Section::Application,
            &[
                "  1.2 Name/Description: Project.exe - (Demo)",
                "  1.4 Parameters      :",
            ],
        );
        assert_eq!(record.get("name_description"), Some("Project.exe - (Demo)"));
        assert_eq!(record.get("parameters"), Some(""));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let record = parse(
            Section::User,
            &["garbage", "ID : 12", "  3.2 Name : Carol", "3.x"],
        );
        assert_eq!(record.get("id_"), None);
        assert_eq!(record.get("name"), Some("Carol"));
    }

    #[test]
    fn test_schema_without_fields() {
        let record = parse(Section::Registers, &["  EAX: 00000000  EDI: 0018F5F8"]);
        assert!(record.is_empty());
    }
}
