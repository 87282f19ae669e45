//! Error types for the MCP server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("coach error: {0}")]
    Core(#[from] daily_coach::CoachError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<McpError> for String {
    fn from(err: McpError) -> Self {
        err.to_string()
    }
}

/// Result type alias for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
