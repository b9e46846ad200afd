use crate::domain::model::OutputFormat;
use crate::utils::error::{CatalogError, Result};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 必填欄位未設定時回報 MissingConfigError
pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查每個輸出格式都是已知格式 (json / csv / tsv)
pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    for format in formats {
        if OutputFormat::from_str(format).is_err() {
            return Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OutputFormat::ALL
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("load.output_path", "./output").is_ok());
        assert!(validate_path("load.output_path", "").is_err());
        assert!(validate_path("load.output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let ok = vec!["json".to_string(), "CSV".to_string(), "tsv".to_string()];
        assert!(validate_output_formats("load.output_formats", &ok).is_ok());

        let bad = vec!["json".to_string(), "xml".to_string()];
        let err = validate_output_formats("load.output_formats", &bad).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_validate_non_empty_and_positive() {
        assert!(validate_non_empty_string("fixtures.courses", "  ").is_err());
        assert!(validate_positive_number("search.quick_limit", 0, 1).is_err());
        assert!(validate_positive_number("search.quick_limit", 5, 1).is_ok());
    }

    #[test]
    fn test_validate_required_reports_missing_field() {
        let err = validate_required("fixtures.courses", " ").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingConfigError { ref field } if field == "fixtures.courses"
        ));
        assert!(validate_required("fixtures.courses", "c.json").is_ok());
    }
}
