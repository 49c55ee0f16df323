//! Static catalog of the sections found in a crash report and the fields each one carries.
//!
//! Field order is fixed here and drives positional mapping in every table parser; it is
//! never inferred from the input.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ElfError, Result};

/// Characters that cannot appear in a field identifier.
///
/// Each is replaced by a space rather than deleted so that adjacent words stay apart
/// (`"Name/Description"` becomes `name_description`, not `namedescription`).
pub const ILLEGAL_CHARACTERS: &[char] = &[
    '#', '/', '-', '.', '$', '\\', '@', '*', '(', ')', '&', '^', '<', '>', '?', ',', '!', '\'',
    '~', '`', '[', ']', '{', '}', '|', '+', '=', ':', ';',
];

/// The known report sections, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    Application,
    Exception,
    User,
    ActiveControls,
    Computer,
    OperatingSystem,
    Network,
    CallStackInformation,
    ModulesInformation,
    ProcessesInformation,
    AssemblerInformation,
    Registers,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::Application,
        Section::Exception,
        Section::User,
        Section::ActiveControls,
        Section::Computer,
        Section::OperatingSystem,
        Section::Network,
        Section::CallStackInformation,
        Section::ModulesInformation,
        Section::ProcessesInformation,
        Section::AssemblerInformation,
        Section::Registers,
    ];

    /// The header text exactly as it appears in a report. Case sensitive.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Application => "Application",
            Section::Exception => "Exception",
            Section::User => "User",
            Section::ActiveControls => "Active Controls",
            Section::Computer => "Computer",
            Section::OperatingSystem => "Operating System",
            Section::Network => "Network",
            Section::CallStackInformation => "Call Stack Information",
            Section::ModulesInformation => "Modules Information",
            Section::ProcessesInformation => "Processes Information",
            Section::AssemblerInformation => "Assembler Information",
            Section::Registers => "Registers",
        }
    }

    /// Canonical lookup key, e.g. `call_stack_information`.
    pub fn key(self) -> String {
        canonical_name(self.heading())
    }

    /// Resolves either the literal heading or its canonical form.
    pub fn from_heading(name: &str) -> Option<Section> {
        if let Some(section) = Section::ALL.iter().find(|s| s.heading() == name) {
            return Some(*section);
        }
        let key = canonical_name(name);
        Section::ALL.iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Field layout of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSchema {
    pub section: Section,
    fields: &'static [&'static str],
    reserved: &'static [&'static str],
}

impl SectionSchema {
    const fn new(
        section: Section,
        fields: &'static [&'static str],
        reserved: &'static [&'static str],
    ) -> Self {
        Self {
            section,
            fields,
            reserved,
        }
    }

    pub fn name(&self) -> &'static str {
        self.section.heading()
    }

    /// Ordered field names, already sanitized.
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Identifiers that receive a trailing underscore when sanitized.
    pub fn reserved_names(&self) -> &'static [&'static str] {
        self.reserved
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    /// Turns a raw attribute label into this section's field identifier.
    pub fn sanitize(&self, raw_label: &str) -> String {
        sanitize(raw_label, self.reserved)
    }
}

/// Read-only catalog of every known section schema.
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: Vec<SectionSchema>,
}

impl SchemaRegistry {
    fn new() -> Self {
        use Section::*;

        let schemas = vec![
            SectionSchema::new(
                Application,
                &[
                    "start_date",
                    "name_description",
                    "version_number",
                    "parameters",
                    "compilation_date",
                    "up_time",
                ],
                &[],
            ),
            SectionSchema::new(
                Exception,
                &[
                    "date",
                    "address",
                    "module_name",
                    "module_version",
                    "type_",
                    "message",
                    "id_",
                    "sent",
                ],
                &["type", "id"],
            ),
            SectionSchema::new(User, &["id_", "name"], &["id"]),
            SectionSchema::new(
                ActiveControls,
                &["form_class", "form_text", "control_class", "control_text"],
                &[],
            ),
            SectionSchema::new(
                Computer,
                &[
                    "name",
                    "total_memory",
                    "free_memory",
                    "total_disk",
                    "free_disk",
                    "system_up_time",
                    "processor",
                    "display_mode",
                    "display_dpi",
                    "video_card",
                    "virtual_machine",
                ],
                &[],
            ),
            SectionSchema::new(
                OperatingSystem,
                &["type_", "build", "update", "non_unicode_language", "charset_acp"],
                &["type"],
            ),
            SectionSchema::new(
                Network,
                &["ip_address", "submask", "gateway", "dns_1", "dns_2", "dhcp"],
                &[],
            ),
            SectionSchema::new(
                CallStackInformation,
                &[
                    "methods",
                    "details",
                    "stack",
                    "address",
                    "module",
                    "offset",
                    "unit",
                    "classname",
                    "procedure",
                    "line",
                ],
                &[],
            ),
            SectionSchema::new(
                ModulesInformation,
                &[
                    "handle",
                    "name",
                    "description",
                    "version",
                    "size",
                    "modified",
                    "path",
                ],
                &[],
            ),
            SectionSchema::new(
                ProcessesInformation,
                &[
                    "id_",
                    "name",
                    "description",
                    "version",
                    "memory",
                    "priority",
                    "threads",
                    "path",
                ],
                &["id"],
            ),
            SectionSchema::new(AssemblerInformation, &[], &[]),
            SectionSchema::new(Registers, &[], &[]),
        ];

        Self { schemas }
    }

    pub fn get(&self, section: Section) -> &SectionSchema {
        // Schemas are stored in `Section` declaration order.
        &self.schemas[section as usize]
    }

    /// Looks up a schema by heading or canonical name.
    pub fn lookup(&self, name: &str) -> Result<&SectionSchema> {
        Section::from_heading(name)
            .map(|section| self.get(section))
            .ok_or_else(|| ElfError::SectionNotFound(name.to_string()))
    }

    pub fn fields(&self, name: &str) -> Result<&'static [&'static str]> {
        self.lookup(name).map(SectionSchema::fields)
    }

    pub fn reserved_names(&self, name: &str) -> Result<&'static [&'static str]> {
        self.lookup(name).map(SectionSchema::reserved_names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionSchema> {
        self.schemas.iter()
    }
}

/// Global schema registry.
pub static SCHEMAS: Lazy<SchemaRegistry> = Lazy::new(SchemaRegistry::new);

/// Replaces every illegal identifier character with a space and trims the result.
pub fn strip_illegal_characters(text: &str) -> String {
    text.chars()
        .map(|c| if ILLEGAL_CHARACTERS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Collapses whitespace runs into `replacement`.
pub(crate) fn collapse_whitespace(text: &str, replacement: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(replacement)
}

/// Lowercased, underscore-joined form of a section heading.
pub fn canonical_name(heading: &str) -> String {
    collapse_whitespace(heading, "_").to_lowercase()
}

/// Converts a raw label into an identifier-safe field name.
///
/// Labels that collide with a `reserved` name get a trailing underscore. An identifier
/// that already ends in `_` is never suffixed again, so sanitizing is idempotent.
pub fn sanitize(raw_label: &str, reserved: &[&str]) -> String {
    let stripped = strip_illegal_characters(raw_label).to_lowercase();
    let mut ident = collapse_whitespace(&stripped, "_");
    if !ident.ends_with('_') && reserved.contains(&ident.as_str()) {
        ident.push('_');
    }
    strip_illegal_characters(&ident)
}
