//! One user's pass from upload to export.
//!
//! The session owns the current file and mapping and only moves forward:
//! `NoFile -> FileUploaded -> MappingProposed -> MappingConfirmed -> Exported`.
//! Uploading again from any state starts over.

use crate::core::automap::propose_mapping;
use crate::core::reshape::{export, reshape};
use crate::domain::model::{ColumnMapping, ExportedFile, UploadedTable};
use crate::domain::schema::{ListType, SchemaDefinition};
use crate::utils::error::{PrepError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoFile,
    FileUploaded,
    MappingProposed,
    MappingConfirmed,
    Exported,
}

impl SessionState {
    pub fn name(self) -> &'static str {
        match self {
            SessionState::NoFile => "NoFile",
            SessionState::FileUploaded => "FileUploaded",
            SessionState::MappingProposed => "MappingProposed",
            SessionState::MappingConfirmed => "MappingConfirmed",
            SessionState::Exported => "Exported",
        }
    }
}

#[derive(Debug)]
pub struct Session {
    list_type: ListType,
    state: SessionState,
    table: Option<UploadedTable>,
    mapping: Option<ColumnMapping>,
}

impl Session {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            state: SessionState::NoFile,
            table: None,
            mapping: None,
        }
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn schema(&self) -> &'static SchemaDefinition {
        self.list_type.schema()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn table(&self) -> Option<&UploadedTable> {
        self.table.as_ref()
    }

    pub fn mapping(&self) -> Option<&ColumnMapping> {
        self.mapping.as_ref()
    }

    pub fn upload(&mut self, table: UploadedTable) {
        if self.state != SessionState::NoFile {
            tracing::debug!("New upload while {}, restarting session", self.state.name());
        }
        self.table = Some(table);
        self.mapping = None;
        self.state = SessionState::FileUploaded;
    }

    pub fn propose(&mut self) -> Result<&ColumnMapping> {
        self.require_state(&[SessionState::FileUploaded], "propose a mapping")?;
        let table = self.uploaded()?;
        let mapping = propose_mapping(&table.headers, self.schema());
        tracing::info!(
            "Auto-mapped {} of {} fields",
            mapping.mapped_count(),
            mapping.len()
        );
        self.state = SessionState::MappingProposed;
        Ok(&*self.mapping.insert(mapping))
    }

    /// Points `field` at `column`, or leaves it unmapped with `None`.
    pub fn set_column(&mut self, field: &str, column: Option<String>) -> Result<()> {
        self.require_state(&[SessionState::MappingProposed], "change the mapping")?;
        if let Some(name) = &column {
            if !self.uploaded()?.has_column(name) {
                return Err(PrepError::ValidationError {
                    message: format!("'{}' is not a column of the uploaded file", name),
                });
            }
        }
        self.current_mapping_mut()?.set(field, column)
    }

    /// Replaces the whole mapping, e.g. with the result of a review.
    pub fn replace_mapping(&mut self, mapping: ColumnMapping) -> Result<()> {
        self.require_state(&[SessionState::MappingProposed], "change the mapping")?;
        let schema = self.schema();
        if mapping.len() != schema.len() || !schema.field_ids().all(|f| mapping.contains_field(f)) {
            return Err(PrepError::ValidationError {
                message: format!("Mapping does not cover the {} fields", self.list_type),
            });
        }
        let table = self.uploaded()?;
        for (field, column) in mapping.iter() {
            if let Some(name) = column {
                if !table.has_column(name) {
                    return Err(PrepError::ValidationError {
                        message: format!("Field '{}' is mapped to unknown column '{}'", field, name),
                    });
                }
            }
        }
        self.mapping = Some(mapping);
        Ok(())
    }

    pub fn confirm(&mut self) -> Result<&ColumnMapping> {
        self.require_state(&[SessionState::MappingProposed], "confirm the mapping")?;
        self.current_mapping_mut()?;
        self.state = SessionState::MappingConfirmed;
        self.current_mapping_mut().map(|m| &*m)
    }

    pub fn export(&mut self) -> Result<ExportedFile> {
        self.require_state(
            &[SessionState::MappingConfirmed, SessionState::Exported],
            "export",
        )?;
        let table = self.uploaded()?;
        let mapping = self.mapping.as_ref().ok_or(PrepError::InvalidState {
            operation: "export",
            state: self.state.name(),
        })?;
        let output = reshape(table, mapping, self.schema())?;
        let file = export(&output, self.list_type)?;
        self.state = SessionState::Exported;
        Ok(file)
    }

    fn require_state(&self, allowed: &[SessionState], operation: &'static str) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(PrepError::InvalidState {
                operation,
                state: self.state.name(),
            })
        }
    }

    fn uploaded(&self) -> Result<&UploadedTable> {
        self.table.as_ref().ok_or(PrepError::InvalidState {
            operation: "read the upload",
            state: self.state.name(),
        })
    }

    fn current_mapping_mut(&mut self) -> Result<&mut ColumnMapping> {
        let state = self.state.name();
        self.mapping.as_mut().ok_or(PrepError::InvalidState {
            operation: "read the mapping",
            state,
        })
    }
}
