use crate::utils::error::{NotiError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(NotiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(NotiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NotiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Bundle id 形如 `com.tinyspeck.slackmacgap`
pub fn validate_bundle_id(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(NotiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Bundle id cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("db_path", "/tmp/db").is_ok());
        assert!(validate_path("db_path", "").is_err());
        assert!(validate_path("db_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("app_label", "Slack").is_ok());
        assert!(validate_non_empty_string("app_label", "   ").is_err());
    }

    #[test]
    fn test_validate_bundle_id() {
        assert!(validate_bundle_id("app_id", "com.tinyspeck.slackmacgap").is_ok());
        assert!(validate_bundle_id("app_id", "").is_err());
        assert!(validate_bundle_id("app_id", "com.example app").is_err());
    }
}
