use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::domain::schema::{FieldSpec, SchemaDefinition};
use crate::utils::error::{PrepError, Result};

/// A parsed input file. Headers keep their original case and whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl UploadedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub field: &'static str,
    pub source: Option<String>,
}

/// Canonical field to source column, in schema order.
///
/// The key set always equals the schema's fields; only the sources change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    /// Every field unmapped.
    pub fn unmapped(schema: &SchemaDefinition) -> Self {
        Self::from_fn(schema, |_| None)
    }

    /// Builds a mapping by asking `source` for each field in schema order.
    pub fn from_fn<F>(schema: &SchemaDefinition, mut source: F) -> Self
    where
        F: FnMut(&FieldSpec) -> Option<String>,
    {
        Self {
            entries: schema
                .fields
                .iter()
                .map(|spec| MappingEntry {
                    field: spec.id,
                    source: source(spec),
                })
                .collect(),
        }
    }

    pub fn source_for(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .and_then(|e| e.source.as_deref())
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.iter().any(|e| e.field == field)
    }

    pub fn set(&mut self, field: &str, source: Option<String>) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.field == field)
            .ok_or_else(|| PrepError::ValidationError {
                message: format!("Unknown field '{}'", field),
            })?;
        entry.source = source;
        Ok(())
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.entries.iter().map(|e| (e.field, e.source.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|e| e.source.is_some()).count()
    }
}

// Serialized as an object in field order, unmapped fields as null.
impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.field, &entry.source)?;
        }
        map.end()
    }
}

/// Reshaped table: canonical headers in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| *h == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}
