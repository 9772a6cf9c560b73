use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects empty or whitespace-only values.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::ValidationError {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(RegistryError::ValidationError {
            field: field_name.to_string(),
            reason: format!("must be greater than zero, got {}", value),
        });
    }
    u32::try_from(value).map_err(|_| RegistryError::ValidationError {
        field: field_name.to_string(),
        reason: format!("must be at most {}, got {}", u32::MAX, value),
    })
}

pub fn parse_integer(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| RegistryError::InvalidNumber {
            input: trimmed.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "courses.json").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "   ").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Ana").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", " \t ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert_eq!(validate_positive("capacity", 3).unwrap(), 3);
        assert!(validate_positive("capacity", 0).is_err());
        assert!(validate_positive("capacity", -5).is_err());
        assert!(validate_positive("capacity", i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 42\n").unwrap(), 42);
        assert_eq!(parse_integer("-1").unwrap(), -1);
        assert!(matches!(
            parse_integer("ten"),
            Err(RegistryError::InvalidNumber { .. })
        ));
    }
}
