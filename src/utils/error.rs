use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Suggestion service error: {message}")]
    SuggestionError { message: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SeoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeoError::HttpError(_) | SeoError::SuggestionError { .. } => ErrorCategory::Network,
            SeoError::ConfigValidationError { .. } | SeoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SeoError::InputError { .. } | SeoError::SerializationError(_) => ErrorCategory::Input,
            SeoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // suggestions are advisory; the analysis itself still succeeded
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeoError::HttpError(_) | SeoError::SuggestionError { .. } => {
                "The suggestion service could not be reached.".to_string()
            }
            SeoError::IoError(e) => format!("Could not read or write a file: {}", e),
            SeoError::SerializationError(_) => "Could not serialize the analysis result.".to_string(),
            SeoError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            SeoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SeoError::InputError { message } => format!("Invalid input: {}", message),
        }
    }

    /// Process exit status. Every failure is non-zero; severity only picks which.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the API key, endpoint and network connectivity, then retry.",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags.",
            ErrorCategory::Input => "Pass text with --text, a file with --file, or pipe it on stdin.",
            ErrorCategory::System => "Check file permissions and available disk space.",
        }
    }
}

pub type Result<T> = std::result::Result<T, SeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SeoError::InvalidConfigValueError {
            field: "suggestions.endpoint".to_string(),
            value: "ftp://example.com".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("suggestions.endpoint"));
    }

    #[test]
    fn test_suggestion_errors_are_low_severity() {
        let err = SeoError::SuggestionError {
            message: "empty candidate list".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let network = SeoError::SuggestionError {
            message: "timeout".to_string(),
        };
        let input = SeoError::InputError {
            message: "no text".to_string(),
        };
        let config = SeoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "bad table".to_string(),
        };
        let io = SeoError::IoError(std::io::Error::other("disk"));

        assert_eq!(network.severity(), ErrorSeverity::Low);
        assert_eq!(network.exit_code(), 1);
        assert_eq!(input.exit_code(), 2);
        assert_eq!(config.exit_code(), 1);
        assert_eq!(io.exit_code(), 3);
    }
}
