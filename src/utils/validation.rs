use crate::utils::error::{Result, RomanError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RomanError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RomanError::ValidationError {
            message: format!("{} must be at least {}", field_name, min_value),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RomanError::ValidationError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(RomanError::ValidationError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
