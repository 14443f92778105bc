use crate::utils::error::{Result, UtilError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| UtilError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks that a name table has exactly `expected` non-empty entries.
pub fn validate_name_table(field_name: &str, names: &[String], expected: usize) -> Result<()> {
    if names.len() != expected {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: names.len().to_string(),
            reason: format!("Expected {} entries", expected),
        });
    }

    if let Some(position) = names.iter().position(|name| name.trim().is_empty()) {
        return Err(UtilError::InvalidConfigValueError {
            field: format!("{}[{}]", field_name, position),
            value: names[position].clone(),
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct(field_names: &[&str], values: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for (field, value) in field_names.iter().zip(values) {
        if !seen.insert(*value) {
            return Err(UtilError::InvalidConfigValueError {
                field: field.to_string(),
                value: value.to_string(),
                reason: format!("Must differ from {}", field_names.join(", ")),
            });
        }
    }
    Ok(())
}
