//! Reshaping an upload into the canonical layout and serializing it.

use crate::domain::model::{ColumnMapping, ExportedFile, OutputTable, UploadedTable};
use crate::domain::schema::{ListType, SchemaDefinition};
use crate::utils::error::{PrepError, Result};

/// Builds the output table: one column per schema field, in schema order.
///
/// Mapped fields copy the source column row by row; unmapped fields are
/// empty strings. Headers are always the canonical ids.
pub fn reshape(
    table: &UploadedTable,
    mapping: &ColumnMapping,
    schema: &SchemaDefinition,
) -> Result<OutputTable> {
    let mut sources: Vec<Option<usize>> = Vec::with_capacity(schema.len());
    for field in schema.fields {
        let source = match mapping.source_for(field.id) {
            Some(column) => Some(table.column_index(column).ok_or_else(|| {
                PrepError::ValidationError {
                    message: format!(
                        "Field '{}' is mapped to '{}', which is not a column of the file",
                        field.id, column
                    ),
                }
            })?),
            None => None,
        };
        sources.push(source);
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            sources
                .iter()
                .map(|source| match source {
                    Some(idx) => row.get(*idx).cloned().unwrap_or_default(),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    Ok(OutputTable {
        headers: schema.field_ids().collect(),
        rows,
    })
}

/// Serializes the output table as CSV: header row, `\n` line endings,
/// quoting only where needed, no index column.
pub fn to_csv_bytes(output: &OutputTable) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&output.headers)?;
    for row in &output.rows {
        writer.write_record(row)?;
    }

    writer.into_inner().map_err(|e| PrepError::IoError(e.into_error()))
}

pub fn export(output: &OutputTable, list_type: ListType) -> Result<ExportedFile> {
    let bytes = to_csv_bytes(output)?;
    tracing::debug!(
        "Serialized {} rows ({} bytes) for {}",
        output.rows.len(),
        bytes.len(),
        list_type.output_file_name()
    );
    Ok(ExportedFile {
        file_name: list_type.output_file_name(),
        bytes,
    })
}
