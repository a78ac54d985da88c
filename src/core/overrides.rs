//! Column choices supplied up front, applied on top of the auto-mapping.

use crate::config::mapping_file::MappingFile;
use crate::core::session::Session;
use crate::utils::error::Result;
use crate::utils::validation::parse_assignment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingOverrides {
    entries: Vec<(String, Option<String>)>,
}

impl MappingOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.entries.push((field.into(), Some(column.into())));
        self
    }

    pub fn unmap(mut self, field: impl Into<String>) -> Self {
        self.entries.push((field.into(), None));
        self
    }

    pub fn from_mapping_file(file: &MappingFile) -> Self {
        let mut overrides = Self::new();
        for (field, column) in &file.columns {
            overrides = overrides.map(field.clone(), column.clone());
        }
        for field in &file.unmapped {
            overrides = overrides.unmap(field.clone());
        }
        overrides
    }

    /// Parses `--map FIELD=COLUMN` and `--unmap FIELD` values.
    pub fn from_args(maps: &[String], unmaps: &[String]) -> Result<Self> {
        let mut overrides = Self::new();
        for value in maps {
            let (field, column) = parse_assignment("map", value)?;
            overrides = overrides.map(field, column);
        }
        for field in unmaps {
            overrides = overrides.unmap(field.trim());
        }
        Ok(overrides)
    }

    /// Later entries win, so `other` takes precedence over `self`.
    pub fn then(mut self, other: MappingOverrides) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Applies every entry to the session's proposed mapping.
    ///
    /// Fails on the first field the schema does not know or column the upload
    /// does not have.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        for (field, column) in &self.entries {
            tracing::debug!("Override {} -> {:?}", field, column);
            session.set_column(field, column.clone())?;
        }
        Ok(())
    }
}
