use crate::domain::model::ColumnMapping;
use crate::domain::schema::ListType;
use crate::utils::error::{PrepError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Saved column choices, reusable across files with the same layout.
///
/// ```toml
/// list_type = "contact"
/// unmapped = ["googleaid"]
///
/// [columns]
/// jobtitle = "Position"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmapped: Vec<String>,
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
}

impl MappingFile {
    /// Loads a mapping file from disk and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: MappingFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    /// Snapshot of a confirmed mapping.
    pub fn from_mapping(list_type: ListType, mapping: &ColumnMapping) -> Self {
        let mut file = MappingFile {
            list_type: Some(list_type),
            ..Default::default()
        };
        for (field, column) in mapping.iter() {
            match column {
                Some(column) => {
                    file.columns.insert(field.to_string(), column.to_string());
                }
                None => file.unmapped.push(field.to_string()),
            }
        }
        file
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Rejects a file written for the other list type.
    pub fn check_list_type(&self, expected: ListType) -> Result<()> {
        match self.list_type {
            Some(found) if found != expected => Err(PrepError::ConfigError {
                message: format!(
                    "Mapping file is for a {} but a {} was requested",
                    found, expected
                ),
            }),
            _ => Ok(()),
        }
    }
}

impl Validate for MappingFile {
    fn validate(&self) -> Result<()> {
        for field in &self.unmapped {
            if self.columns.contains_key(field) {
                return Err(PrepError::ValidationError {
                    message: format!("Field '{}' is both mapped and unmapped", field),
                });
            }
        }
        for (field, column) in &self.columns {
            crate::utils::validation::validate_non_empty_string(&format!("columns.{}", field), column)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping_file() {
        let file = MappingFile::from_toml_str(
            r#"
list_type = "company"
unmapped = ["zipcode"]

[columns]
companyname = "Account Name"
city = "Billing City"
"#,
        )
        .unwrap();

        assert_eq!(file.list_type, Some(ListType::Company));
        assert_eq!(file.unmapped, vec!["zipcode"]);
        assert_eq!(file.columns.get("city").map(String::as_str), Some("Billing City"));
        assert!(file.check_list_type(ListType::Company).is_ok());
        assert!(file.check_list_type(ListType::Contact).is_err());
    }

    #[test]
    fn test_conflicting_entries_rejected() {
        let result = MappingFile::from_toml_str(
            r#"
unmapped = ["email"]

[columns]
email = "Email"
"#,
        );
        assert!(matches!(result, Err(PrepError::ValidationError { .. })));
    }

    #[test]
    fn test_blank_column_rejected() {
        let result = MappingFile::from_toml_str("[columns]\nemail = \"  \"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_saved_mapping_reads_back() {
        let schema = ListType::Contact.schema();
        let mut mapping = ColumnMapping::unmapped(schema);
        mapping.set("email", Some("E-mail".to_string())).unwrap();
        mapping.set("country", Some("Land".to_string())).unwrap();

        let saved = MappingFile::from_mapping(ListType::Contact, &mapping);
        let text = saved.to_toml_string().unwrap();
        let loaded = MappingFile::from_toml_str(&text).unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.unmapped.len(), 5);
    }
}
