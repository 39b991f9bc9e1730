use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodelyzerError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError { path: String, reason: String },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError { content_type: String, reason: String },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError { operation: String, reason: String },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError { operation: String, reason: String },
}

impl CodelyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. })
    }

    /// Display text plus the field and suggestion hints, for terminal output.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { .. } => {
                format!("{}\n💡 Check file permissions and syntax", self)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for codelyzer operations
pub type CodelyzerResult<T> = Result<T, CodelyzerError>;

impl From<std::io::Error> for CodelyzerError {
    fn from(error: std::io::Error) -> Self {
        CodelyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CodelyzerError {
    fn from(error: serde_json::Error) -> Self {
        CodelyzerError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for CodelyzerError {
    fn from(error: toml::de::Error) -> Self {
        CodelyzerError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}
