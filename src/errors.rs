//! Boundary error type
//!
//! The analyzers are total functions and never fail; errors exist only
//! at the edges: argument validation, configuration, transport IO, and
//! serialization. `ErrorCategory` gives a coarse classification for
//! logs and structured reporting.

use thiserror::Error;

/// Coarse classification for logging and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Protocol,
    Transport,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Primary application error type
#[derive(Error, Debug)]
pub enum SpamsenseError {
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidToolArguments { tool: String, message: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SpamsenseError {
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidToolArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SpamsenseError::InvalidToolArguments { .. } => ErrorCategory::Validation,
            SpamsenseError::Configuration { .. } => ErrorCategory::Validation,
            SpamsenseError::UnknownTool { .. } => ErrorCategory::Protocol,
            SpamsenseError::Transport(_) => ErrorCategory::Transport,
            SpamsenseError::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpamsenseError>;

// =============================================================================
// TESTS
// =============================================================================
