//! Keyword-based column matching.

use crate::domain::model::ColumnMapping;
use crate::domain::schema::{FieldSpec, SchemaDefinition};

/// Proposes a source column for every field of `schema`.
///
/// Fields are visited in schema order and columns in file order. A field takes
/// the first column whose lowercased name contains any of its keywords; there
/// is no scoring, so an earlier weak match beats a later exact one. Columns are
/// not exclusive and may be proposed for several fields.
pub fn propose_mapping(columns: &[String], schema: &SchemaDefinition) -> ColumnMapping {
    let lowered: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();

    ColumnMapping::from_fn(schema, |field| {
        let matched = lowered
            .iter()
            .position(|name| matches_field(name, field))
            .map(|idx| columns[idx].clone());

        match &matched {
            Some(column) => tracing::debug!("Auto-mapped {} -> '{}'", field.id, column),
            None => tracing::debug!("No column matched {}", field.id),
        }
        matched
    })
}

fn matches_field(lowered_column: &str, field: &FieldSpec) -> bool {
    field
        .keywords
        .iter()
        .any(|keyword| lowered_column.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ListType;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_key_set_matches_schema() {
        for list_type in ListType::ALL {
            let schema = list_type.schema();
            let mapping = propose_mapping(&cols(&["whatever", "Email"]), schema);
            let fields: Vec<_> = mapping.iter().map(|(f, _)| f).collect();
            let expected: Vec<_> = schema.field_ids().collect();
            assert_eq!(fields, expected);
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let mapping = propose_mapping(
            &cols(&["Email Address", "First_Name"]),
            ListType::Contact.schema(),
        );
        assert_eq!(mapping.source_for("email"), Some("Email Address"));
        assert_eq!(mapping.source_for("firstname"), Some("First_Name"));
    }

    #[test]
    fn test_first_match_wins() {
        let mapping = propose_mapping(
            &cols(&["Company", "Company Name"]),
            ListType::Company.schema(),
        );
        assert_eq!(mapping.source_for("companyname"), Some("Company"));
    }

    #[test]
    fn test_any_keyword_matches() {
        let mapping = propose_mapping(
            &cols(&["Position Held", "GAID"]),
            ListType::Contact.schema(),
        );
        assert_eq!(mapping.source_for("jobtitle"), Some("Position Held"));
        assert_eq!(mapping.source_for("googleaid"), Some("GAID"));
    }

    #[test]
    fn test_column_claimed_by_several_fields() {
        // "Company Web Page" contains "company", "web" and "page"
        let mapping = propose_mapping(&cols(&["Company Web Page"]), ListType::Company.schema());
        assert_eq!(mapping.source_for("companyname"), Some("Company Web Page"));
        assert_eq!(mapping.source_for("companywebsite"), Some("Company Web Page"));
        assert_eq!(
            mapping.source_for("linkedincompanypageurl"),
            Some("Company Web Page")
        );
    }

    #[test]
    fn test_no_matches_leaves_everything_unmapped() {
        let mapping = propose_mapping(&cols(&["foo", "bar"]), ListType::Contact.schema());
        assert_eq!(mapping.len(), 7);
        assert_eq!(mapping.mapped_count(), 0);
    }

    #[test]
    fn test_whitespace_preserved_in_proposal() {
        let mapping = propose_mapping(&cols(&["  Country "]), ListType::Contact.schema());
        assert_eq!(mapping.source_for("country"), Some("  Country "));
    }

    #[test]
    fn test_end_to_end_contact_proposal() {
        let mapping = propose_mapping(
            &cols(&["First", "Last", "Email Addr", "Biz"]),
            ListType::Contact.schema(),
        );
        assert_eq!(mapping.source_for("firstname"), Some("First"));
        assert_eq!(mapping.source_for("lastname"), Some("Last"));
        assert_eq!(mapping.source_for("email"), Some("Email Addr"));
        assert_eq!(mapping.source_for("employeecompany"), Some("Biz"));
        assert_eq!(mapping.source_for("jobtitle"), None);
        assert_eq!(mapping.source_for("country"), None);
        assert_eq!(mapping.source_for("googleaid"), None);
    }
}
