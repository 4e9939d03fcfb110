use super::error_code::{self, SwigErrorCode};
use super::{ConfigError, StorageError};

/// Top-level error type for swig.
#[derive(Debug, thiserror::Error)]
pub enum SwigError {
    #[error("game not found or expired: {id}")]
    GameNotFound { id: String },

    #[error("rule not found or is custom: {id}")]
    RuleNotFound { id: String },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("rule generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SwigError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl SwigErrorCode for SwigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GameNotFound { .. } => error_code::GAME_NOT_FOUND,
            Self::RuleNotFound { .. } => error_code::RULE_NOT_FOUND,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::GenerationFailed { .. } => error_code::GENERATION_FAILED,
            Self::Storage(_) => error_code::STORAGE_ERROR,
            Self::Config(_) => error_code::CONFIG_ERROR,
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::GameNotFound { .. } | Self::RuleNotFound { .. } => 404,
            Self::GenerationFailed { .. } | Self::Storage(_) | Self::Config(_) => 500,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type SwigResult<T> = Result<T, SwigError>;
