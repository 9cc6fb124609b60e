use serde::{Deserialize, Serialize};

/// Main tool error type.
///
/// Validation failures are raised to the plugin host as errors; synthesis
/// failures are not represented here because they are converted into a
/// user-visible text message instead of propagating (see `tool`).
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Parameter validation failed: {0}")]
    ParameterValidation(String),

    #[error("Credential validation failed: {0}")]
    CredentialValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Error payload handed back to the plugin host.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ToolError {
    /// Convert to simplified error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

/// Custom result type for tool invocations
pub type ToolResult<T> = Result<T, ToolError>;
