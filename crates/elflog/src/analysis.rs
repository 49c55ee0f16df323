//! Call-stack comparison helpers used to group crashes with the same origin.

use crate::error::{ElfError, Result};
use crate::record::{CallStack, Record};
use crate::schema::{SCHEMAS, Section};

const SIGNATURE_FIELDS: [&str; 2] = ["procedure", "unit"];
const CRASH_KEY_FIELDS: [&str; 4] = ["unit", "classname", "procedure", "offset"];

/// Fails with [`ElfError::UnknownField`] unless every field exists in the section schema.
pub fn require_fields(section: Section, fields: &[&str]) -> Result<()> {
    let schema = SCHEMAS.get(section);
    match fields.iter().find(|field| !schema.has_field(field)) {
        Some(missing) => Err(ElfError::UnknownField {
            section: section.heading().to_string(),
            field: missing.to_string(),
        }),
        None => Ok(()),
    }
}

fn value<'a>(frame: &'a Record, field: &str) -> &'a str {
    frame.get(field).unwrap_or_default()
}

/// One `procedure:unit` entry per frame, top of stack first.
pub fn stack_signature(stack: &CallStack) -> Vec<String> {
    stack
        .frames
        .iter()
        .map(|frame| format!("{}:{}", value(frame, "procedure"), value(frame, "unit")))
        .collect()
}

/// Single string identifying a crash site, built from unit, class, procedure and offset
/// of every frame. Two reports with equal keys crashed along the same path.
pub fn crash_key(stack: &CallStack) -> String {
    stack
        .frames
        .iter()
        .map(|frame| {
            CRASH_KEY_FIELDS
                .iter()
                .map(|field| value(frame, field))
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect::<Vec<_>>()
        .join(" > ")
}
