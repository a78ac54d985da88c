use crate::utils::error::{PrepError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PrepError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Splits a `field=Column` override. The column keeps its inner whitespace.
pub fn parse_assignment(field_name: &str, value: &str) -> Result<(String, String)> {
    let (field, column) = value.split_once('=').ok_or_else(|| PrepError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Expected FIELD=COLUMN".to_string(),
    })?;
    let field = field.trim();
    validate_non_empty_string(field_name, field)?;
    validate_non_empty_string(field_name, column)?;
    Ok((field.to_string(), column.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "./out").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "a\0b").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input", "leads.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("input", "LEADS.CSV", &["csv"]).is_ok());
        assert!(validate_file_extension("input", "leads.xlsx", &["csv"]).is_err());
        assert!(validate_file_extension("input", "leads", &["csv"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("list_type", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("list_type", &missing),
            Err(PrepError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("map", "jobtitle=Job Title ").unwrap(),
            ("jobtitle".to_string(), "Job Title ".to_string())
        );
        assert_eq!(
            parse_assignment("map", "email=a=b").unwrap(),
            ("email".to_string(), "a=b".to_string())
        );
        assert!(parse_assignment("map", "jobtitle").is_err());
        assert!(parse_assignment("map", "=Title").is_err());
        assert!(parse_assignment("map", "jobtitle=").is_err());
    }
}
