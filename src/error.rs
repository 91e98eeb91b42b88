//! Error types for the Okta MCP server.
//!
//! The taxonomy mirrors the three ways a tool invocation (or the process
//! itself) can fail:
//!
//! - [`ConfigError`] - required environment values are missing at startup
//! - [`ValidationError`] - tool arguments do not match the declared schema
//! - [`ApiError`] - the identity-provider call failed
//!
//! [`ToolError`] is what the dispatcher hands back to the protocol layer. An
//! external failure is always reduced to `Failed to <operation>: <message>`.
//! [`ServeError`] ends the stdio session itself.

/// Configuration errors raised while reading the process environment.
///
/// Any of these is fatal: the server must not start serving tools.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required variable is unset or blank
    #[error("Required environment variable {name} must be set")]
    MissingVariable { name: String },

    /// Variable is present but cannot be interpreted
    #[error("Environment variable {name} has an invalid value: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Schema validation errors for tool arguments.
///
/// Every variant carries the dotted path of the offending field
/// (e.g. `profile.email`) so callers can correct their input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is missing or null
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    /// Field value has the wrong JSON type
    #[error("Field '{field}' has invalid type, expected {expected}")]
    InvalidType { field: String, expected: String },

    /// Field value has the right type but an invalid shape
    #[error("Field '{field}' is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Errors from the identity-provider HTTP API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success status code, with the Okta error body when one was returned
    #[error("{}", format_http_error(.status, .code.as_deref(), .summary.as_deref()))]
    Http {
        status: u16,
        code: Option<String>,
        summary: Option<String>,
    },

    /// Connection, TLS or protocol level failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Unable to decode response: {reason}")]
    Decode { reason: String },

    /// API token cannot be sent as an HTTP header
    #[error("API token contains characters that are not allowed in an HTTP header")]
    InvalidToken,

    /// Request URL could not be built
    #[error("Invalid request URL: {reason}")]
    InvalidUrl { reason: String },
}

fn format_http_error(status: &u16, code: Option<&str>, summary: Option<&str>) -> String {
    match (code, summary) {
        (Some(code), Some(summary)) => format!("Okta HTTP {} {} {}", status, code, summary),
        (Some(code), None) => format!("Okta HTTP {} {}", status, code),
        (None, Some(summary)) => format!("Okta HTTP {} {}", status, summary),
        (None, None) => format!("Okta HTTP {}", status),
    }
}

/// Outcome of a failed tool invocation.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No tool is registered under this name
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Arguments were rejected before any external call was made
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    /// The external call sequence failed
    #[error("Failed to {operation}: {message}")]
    Failed { operation: String, message: String },
}

impl ValidationError {
    /// Create a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::InvalidType { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

impl ApiError {
    /// HTTP status of the failed call, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl ToolError {
    /// Wrap any error raised during an operation's external call sequence.
    pub fn failed(operation: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Failed {
            operation: operation.into(),
            message: error.to_string(),
        }
    }

    /// Whether the caller should treat this as a malformed request
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::UnknownTool { .. } | Self::Validation(_))
    }

    /// Dotted path of the rejected argument, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => Some(err.field()),
            _ => None,
        }
    }
}

/// Errors that end a stdio session.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Reading stdin or writing stdout failed
    #[error("stdio transport failed: {0}")]
    Io(#[from] std::io::Error),

    /// The client closed the connection or broke the `initialize` handshake
    #[error("MCP initialization failed: {reason}")]
    Initialize { reason: String },

    /// A session task stopped abnormally
    #[error("MCP session task failed: {reason}")]
    Task { reason: String },
}

// Result type aliases for convenience
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type ApiResult<T> = Result<T, ApiError>;
pub type ToolResult<T> = Result<T, ToolError>;
pub type ServeResult<T> = Result<T, ServeError>;
