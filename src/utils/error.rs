use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unsupported environment: {message}")]
    UnsupportedEnvironment { message: String },

    #[error("Unsupported DateUnit: {unit}")]
    UnsupportedUnit { unit: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Environment,
    Configuration,
    Internal,
}

impl UtilError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn unsupported_environment(message: impl Into<String>) -> Self {
        Self::UnsupportedEnvironment {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::UnsupportedUnit { .. } => ErrorCategory::Argument,
            Self::UnsupportedEnvironment { .. } => ErrorCategory::Environment,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => format!("Invalid input: {}", message),
            Self::UnsupportedUnit { unit } => format!(
                "'{}' is not a date unit; use millisecond, second, minute, hour, day, week, month or year",
                unit
            ),
            Self::UnsupportedEnvironment { message } => {
                format!("This build cannot do that: {}", message)
            }
            Self::ConfigError { message } => format!("Locale configuration is broken: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Locale setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Locale setting '{}' is required", field)
            }
            Self::IoError(e) => format!("Could not read file: {}", e),
            Self::SerializationError(e) => format!("Could not convert value: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(
            UtilError::invalid_argument("x").category(),
            ErrorCategory::Argument
        );
        assert_eq!(
            UtilError::UnsupportedUnit {
                unit: "fortnight".to_string()
            }
            .category(),
            ErrorCategory::Argument
        );
        assert_eq!(
            UtilError::unsupported_environment("no codec").category(),
            ErrorCategory::Environment
        );
        assert_eq!(
            UtilError::MissingConfigError {
                field: "id".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_display_keeps_message() {
        let err = UtilError::invalid_argument("chunk size must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument: chunk size must be greater than 0"
        );
        assert!(err.user_friendly_message().contains("chunk size"));
    }
}
