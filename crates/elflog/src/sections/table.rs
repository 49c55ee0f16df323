use crate::config::ParseOptions;
use crate::record::{ParsedSection, Record};
use crate::schema::SectionSchema;

use super::SectionParser;

/// Parser for pipe-delimited tables such as Modules Information.
///
/// The first `table_header_rows` lines are the title row and its divider and are skipped
/// whatever they contain. After that every line holding the column delimiter is one row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser;

impl SectionParser for TableParser {
    fn parse(
        &self,
        schema: &SectionSchema,
        lines: &[String],
        options: &ParseOptions,
    ) -> ParsedSection {
        let delimiter = options.column_delimiter;
        let rows = lines
            .iter()
            .skip(options.table_header_rows)
            .filter(|line| line.contains(delimiter))
            .map(|line| {
                let cells: Vec<&str> = line.trim().split(delimiter).collect();
                // Rows open and close with the delimiter, so the outer cells are empty.
                let interior = match cells.len() {
                    0..=2 => &cells[..0],
                    n => &cells[1..n - 1],
                };
                Record::from_positional(schema, interior.iter().map(|c| c.trim()))
            })
            .collect();

        ParsedSection::Table(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SCHEMAS, Section};

    fn parse(section: Section, lines: &[&str]) -> Vec<Record> {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        match TableParser.parse(SCHEMAS.get(section), &lines, &ParseOptions::default()) {
            ParsedSection::Table(rows) => rows,
            other => panic!("Expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_modules_table() {
        let rows = parse(
            Section::ModulesInformation,
            &[
                "--------------------------------------------------------------------",
                "|Handle  |Name        |Description |Version |Size   |Modified |Path |",
                "--------------------------------------------------------------------",
                "|00400000|Project.exe |Demo        |1.0.0.0 |1024000|05/11/2020 |C:\\App\\ |",
                "|77A20000|ntdll.dll   |NT Layer DLL|6.1.7601|1736704|11/21/2010 |C:\\Windows\\ |",
                "--------------------------------------------------------------------",
            ],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("handle"), Some("00400000"));
        assert_eq!(rows[0].get("path"), Some("C:\\App\\"));
        assert_eq!(rows[1].get("description"), Some("NT Layer DLL"));
    }

    #[test]
    fn test_exact_width_row_round_trips() {
        let rows = parse(
            Section::ProcessesInformation,
            &[
                "title",
                "-----",
                "| 4 | System |  | 6.1 | 128 | 8 | 97 | C:\\System |",
            ],
        );
        assert_eq!(rows.len(), 1);
        let values: Vec<Option<&str>> = rows[0].iter().map(|(_, v)| v).collect();
        assert_eq!(
            values,
            vec![
                Some("4"),
                Some("System"),
                Some(""),
                Some("6.1"),
                Some("128"),
                Some("8"),
                Some("97"),
                Some("C:\\System"),
            ]
        );
    }

    #[test]
    fn test_short_and_long_rows() {
        let rows = parse(
            Section::ModulesInformation,
            &[
                "-----",
                "|Handle|Name|",
                "|00400000|Project.exe|",
                "|1|2|3|4|5|6|7|8|9|",
            ],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("name"), Some("Project.exe"));
        assert_eq!(rows[0].get("description"), None);
        assert_eq!(rows[1].get("path"), Some("7"));
        assert_eq!(rows[1].len(), 7);
    }

    #[test]
    fn test_header_rows_skipped_by_position() {
        // The header row is skipped even though it contains delimiters.
        let rows = parse(
            Section::ModulesInformation,
            &["|Handle|Name|", "|Handle|Name|", "", "|A|B|"],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("handle"), Some("A"));
    }
}
