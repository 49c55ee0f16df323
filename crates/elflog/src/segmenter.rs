//! Splits report text into named blocks of raw lines.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde::ser::Serializer;

/// A header starts in column 0 with a word character, continues with word characters and
/// spaces, and ends in a colon. Body lines are always indented.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>\w[\w\s]*):$").expect("valid section header pattern"));

/// The lines that follow one section header, up to the next header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSection {
    pub name: String,
    pub lines: Vec<String>,
}

impl RawSection {
    /// The section body as it appeared in the input, minus trailing whitespace.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// Raw sections in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSections {
    sections: Vec<RawSection>,
}

impl RawSections {
    pub fn get(&self, name: &str) -> Option<&RawSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawSection> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Opens a section, replacing any earlier one with the same name. Returns its index.
    fn open(&mut self, name: &str) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.name == name) {
            self.sections[index].lines.clear();
            return index;
        }
        self.sections.push(RawSection {
            name: name.to_string(),
            lines: Vec::new(),
        });
        self.sections.len() - 1
    }
}

impl Serialize for RawSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sections.iter().map(|s| (&s.name, &s.lines)))
    }
}

/// Returns the section name if `line` is a section header.
pub fn header_name(line: &str) -> Option<&str> {
    let captures = SECTION_HEADER.captures(line.trim_end())?;
    captures.name("name").map(|name| name.as_str())
}

/// Single pass over `lines`: each header opens a section, every other line joins the
/// open section. Lines before the first header are dropped.
pub fn segment<I, S>(lines: I) -> RawSections
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sections = RawSections::default();
    let mut current: Option<usize> = None;

    for line in lines {
        let line = line.as_ref();
        if let Some(name) = header_name(line) {
            current = Some(sections.open(name));
        } else if let Some(index) = current {
            sections.sections[index]
                .lines
                .push(line.trim_end().to_string());
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_detection() {
        assert_eq!(header_name("Call Stack Information:"), Some("Call Stack Information"));
        assert_eq!(header_name("Exception:  \r"), Some("Exception"));
        assert_eq!(header_name("  2.1 Date : Mon"), None);
        assert_eq!(header_name("Message: boom"), None);
        assert_eq!(header_name("Name/Description:"), None);
        assert_eq!(header_name("   :"), None);
        assert_eq!(header_name(""), None);
        assert_eq!(header_name("  3 ID :"), None);
        assert_eq!(header_name("\tUser:"), None);
    }

    #[test]
    fn test_indented_colon_line_stays_in_section() {
        let sections = segment("User:\n  3 ID :\n  4 Name : bob\n".lines());
        assert_eq!(sections.names().collect::<Vec<_>>(), vec!["User"]);
        assert_eq!(
            sections.get("User").unwrap().lines,
            vec!["  3 ID :", "  4 Name : bob"]
        );
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let input = "EurekaLog 7.7.8.31\n\nApplication:\n  1.1 Start Date : today\n";
        let sections = segment(input.lines());
        assert_eq!(sections.len(), 1);
        let app = sections.get("Application").unwrap();
        assert_eq!(app.lines, vec!["  1.1 Start Date : today"]);
    }

    #[test]
    fn test_body_is_preserved() {
        let body = "---------\n  1.1 A : x\n\n  1.2 B : y";
        let input = format!("Application:\n{}\nUser:\n  3.1 ID : 1", body);
        let sections = segment(input.lines());

        assert_eq!(sections.names().collect::<Vec<_>>(), vec!["Application", "User"]);
        assert_eq!(sections.get("Application").unwrap().body(), body);
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let sections = segment(["User:", "  3.1 ID : 1   ", "\t"]);
        assert_eq!(sections.get("User").unwrap().lines, vec!["  3.1 ID : 1", ""]);
    }

    #[test]
    fn test_repeated_header_overwrites() {
        let sections = segment(["User:", "first", "Network:", "n", "User:", "second"]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get("User").unwrap().lines, vec!["second"]);
    }

    #[test]
    fn test_raw_sections_serialize_as_map() {
        let sections = segment(["User:", "a"]);
        let json = serde_json::to_string(&sections).unwrap();
        assert_eq!(json, r#"{"User":["a"]}"#);
    }
}
