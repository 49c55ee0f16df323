use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::schema::SectionSchema;

/// One parsed entity: a key/value block, a table row, a stack frame or a network interface.
///
/// The field set always equals the schema's field list, in schema order. Fields the
/// input never supplied are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, Option<String>)>,
}

impl Record {
    /// Creates a record with every schema field absent.
    pub fn empty(schema: &SectionSchema) -> Self {
        Self {
            fields: schema.fields().iter().map(|f| (*f, None)).collect(),
        }
    }

    /// Zips `values` positionally onto the schema fields. Extra values are dropped.
    pub fn from_positional<I, S>(schema: &SectionSchema, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::empty(schema);
        for (slot, value) in record.fields.iter_mut().zip(values) {
            slot.1 = Some(value.into());
        }
        record
    }

    /// Sets a field by name. Returns `false` if the schema has no such field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => {
                slot.1 = Some(value.into());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// `(field, value)` pairs in schema order, including absent fields.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.fields
            .iter()
            .map(|(name, value)| (*name, value.as_deref()))
    }

    /// True when no field carries a value.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_none())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Summary text plus frame table of the call-stack section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallStack {
    pub summary: String,
    pub frames: Vec<Record>,
}

/// Typed result for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedSection {
    /// Key/value sections such as Exception or Computer.
    Single(Record),
    /// Tables and the transposed network section.
    Table(Vec<Record>),
    CallStack(CallStack),
}

impl ParsedSection {
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            ParsedSection::Single(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[Record]> {
        match self {
            ParsedSection::Table(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_call_stack(&self) -> Option<&CallStack> {
        match self {
            ParsedSection::CallStack(stack) => Some(stack),
            _ => None,
        }
    }
}
