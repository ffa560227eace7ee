use crate::utils::validation::ValidationErrorSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String },

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrorSet),

    #[error("Encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Payload,
    Validation,
    Configuration,
    System,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CodecError {
    pub fn malformed(message: impl Into<String>) -> Self {
        CodecError::MalformedPayload {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CodecError::MalformedPayload { .. } => ErrorCategory::Payload,
            CodecError::ValidationFailed(_) => ErrorCategory::Validation,
            CodecError::Encode(_) => ErrorCategory::Internal,
            CodecError::IoError(_) => ErrorCategory::System,
            CodecError::ConfigError { .. } | CodecError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CodecError::ValidationFailed(_) => ErrorSeverity::Medium,
            CodecError::MalformedPayload { .. }
            | CodecError::IoError(_)
            | CodecError::ConfigError { .. }
            | CodecError::ConfigValidationError { .. } => ErrorSeverity::High,
            CodecError::Encode(_) => ErrorSeverity::Critical,
        }
    }

    /// The violation set, when this is a validation rejection.
    pub fn violations(&self) -> Option<&ValidationErrorSet> {
        match self {
            CodecError::ValidationFailed(set) => Some(set),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CodecError::MalformedPayload { message } => {
                format!("The payment order could not be read: {}", message)
            }
            CodecError::ValidationFailed(set) => format!(
                "The payment order was rejected ({} problem(s)): {}",
                set.len(),
                set
            ),
            CodecError::Encode(e) => format!("The payment order could not be written: {}", e),
            CodecError::IoError(e) => format!("File access failed: {}", e),
            CodecError::ConfigError { message } => format!("Configuration problem: {}", message),
            CodecError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Payload => {
                "Send a JSON object using the documented payment order field names"
            }
            ErrorCategory::Validation => "Correct the listed fields and resubmit the payment order",
            ErrorCategory::Configuration => "Check the configuration file and referenced environment variables",
            ErrorCategory::System => "Check that the input file exists and is readable",
            ErrorCategory::Internal => "This is unexpected; report it together with the payload",
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
