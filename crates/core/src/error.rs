use crate::config::ConfigError;
use thiserror::Error;

/// Error type shared by every stage of enum generation
#[derive(Debug, Error)]
pub enum EnumGenError {
    #[error("Enum name cannot be empty")]
    EmptyTypeName,

    #[error("Invalid enum name: '{name}'. Expected a Java identifier such as TaskStatus")]
    InvalidTypeName { name: String },

    #[error("Enum codes cannot be empty")]
    EmptyInput,

    #[error("Malformed entry: '{segment}'. Expected <code>: <Name>, e.g. 1: Waiting")]
    MalformedEntry { segment: String },

    #[error("Code out of range in entry: '{segment}'. Codes must fit in a 32-bit int")]
    CodeOutOfRange { segment: String },

    #[error("No entries to generate")]
    EmptyEntryList,

    #[error("Duplicate code: {code}")]
    DuplicateCode { code: i32 },

    #[error("Duplicate member identifier: {identifier}")]
    DuplicateIdentifier { identifier: String },

    #[error("Failed to save generated enum file {path}: {reason}")]
    WriteFailure { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Prompt error: {message}")]
    Prompt { message: String },
}

impl EnumGenError {
    /// Create a malformed entry error for the given raw segment
    pub fn malformed(segment: impl Into<String>) -> Self {
        Self::MalformedEntry {
            segment: segment.into(),
        }
    }

    /// Create a write failure error
    pub fn write_failure(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Check if the error was caused by user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTypeName
                | Self::InvalidTypeName { .. }
                | Self::EmptyInput
                | Self::MalformedEntry { .. }
                | Self::CodeOutOfRange { .. }
                | Self::EmptyEntryList
                | Self::DuplicateCode { .. }
                | Self::DuplicateIdentifier { .. }
        )
    }

    /// The raw segment text behind a parse failure, if any
    pub fn failing_segment(&self) -> Option<&str> {
        match self {
            Self::MalformedEntry { segment } | Self::CodeOutOfRange { segment } => Some(segment),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnumGenError>;
