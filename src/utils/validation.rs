use crate::utils::error::{Result, RomanError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_log_directive(field_name: &str, directive: &str) -> Result<()> {
    if directive.trim().is_empty() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directive.to_string(),
            reason: "Log level cannot be empty".to_string(),
        });
    }

    EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directive.to_string(),
            reason: format!("Invalid filter directive: {}", e),
        })
}

pub fn validate_existing_file(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if !path.is_file() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File does not exist".to_string(),
        });
    }

    Ok(())
}
