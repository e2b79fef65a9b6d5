use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("Invalid input {input:?}: {message}")]
    InvalidInput { input: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
}

impl RomanError {
    pub fn invalid_input(input: impl Into<String>, message: impl Into<String>) -> Self {
        RomanError::InvalidInput {
            input: input.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::InvalidInput { .. } => ErrorCategory::Input,
            RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            RomanError::IoError(_) | RomanError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::InvalidInput { input, .. } => {
                format!("'{}' is not a numeral made of I, V and X", input)
            }
            RomanError::IoError(e) => format!("Could not read input: {}", e),
            RomanError::SerializationError(e) => format!("Malformed JSON: {}", e),
            RomanError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            RomanError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for '{}'", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use upper-case numerals built from I, V and X only (e.g. XIV)",
            ErrorCategory::Config => "Check the configuration file and command-line flags",
            ErrorCategory::Io => "Check that the file exists and contains valid JSON",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Io => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_category_and_exit_code() {
        let err = RomanError::invalid_input("IL", "symbol 'L' is outside I, V, X");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_invalid_input());
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("IL"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let err = RomanError::InvalidConfigValueError {
            field: "adder.strategy".to_string(),
            value: "fastest".to_string(),
            reason: "unknown strategy".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("fastest"));
    }
}
