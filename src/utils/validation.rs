use crate::utils::error::{Result, SolidError};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(SolidError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one value is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T: Eq + Hash + Display>(field_name: &str, values: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(SolidError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value is listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("demo.principles", &["srp"]).is_ok());
        let empty: [&str; 0] = [];
        assert!(validate_non_empty_list("demo.principles", &empty).is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("demo.variants", &["violation", "compliant"]).is_ok());
        assert!(validate_unique("demo.variants", &["compliant", "compliant"]).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "debug", &["info", "debug"]).is_ok());
        assert!(validate_one_of("logging.level", "loud", &["info", "debug"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "ape").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
