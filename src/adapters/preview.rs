//! Terminal tables for the upload preview and the mapping summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::model::{ColumnMapping, UploadedTable};
use crate::domain::schema::SchemaDefinition;

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// The header and first `rows` rows of the upload.
pub fn upload_preview(upload: &UploadedTable, rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(upload.headers.iter().map(Cell::new));
    apply_table_style(&mut table);
    for row in upload.rows.iter().take(rows) {
        table.add_row(row.iter().map(Cell::new));
    }
    table
}

pub fn mapping_table(schema: &SchemaDefinition, mapping: &ColumnMapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Output column", "Source column"]);
    apply_table_style(&mut table);
    for field in schema.fields {
        let source = match mapping.source_for(field.id) {
            Some(column) => Cell::new(column),
            None => Cell::new("(none)").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(field.label).add_attribute(Attribute::Bold),
            Cell::new(field.id),
            source,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::automap::propose_mapping;
    use crate::domain::schema::ListType;

    #[test]
    fn test_preview_limits_rows() {
        let upload = UploadedTable::new(
            vec!["Email".into()],
            (0..10).map(|i| vec![format!("user{}@example.com", i)]).collect(),
        );
        let rendered = upload_preview(&upload, 3).to_string();
        assert!(rendered.contains("user2@example.com"));
        assert!(!rendered.contains("user3@example.com"));
    }

    #[test]
    fn test_mapping_table_lists_every_field() {
        let schema = ListType::Contact.schema();
        let mapping = propose_mapping(&["Email Address".to_string()], schema);
        let table = mapping_table(schema, &mapping);
        assert_eq!(table.row_iter().count(), schema.len());
        let rendered = table.to_string();
        assert!(rendered.contains("Google Ad ID"));
        assert!(rendered.contains("Email Address"));
    }
}
