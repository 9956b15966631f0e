//! Error types for the paper tools MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Errors from the PDF folder provider.
#[derive(thiserror::Error, Debug)]
pub enum PdfError {
    /// The configured folder does not exist or is not a directory.
    #[error("PDF folder {} does not exist", .0.display())]
    FolderNotFound(PathBuf),

    /// The requested file is not in the folder.
    #[error("{filename} not found in {}", folder.display())]
    FileNotFound {
        /// Name as requested by the caller
        filename: String,
        /// Configured folder
        folder: PathBuf,
    },

    /// The requested name is not a plain file name.
    #[error("invalid filename '{0}': expected a bare file name inside the PDF folder")]
    InvalidFilename(String),

    /// Filesystem error while listing or reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as a PDF, or a page failed to extract.
    #[error("failed to parse {filename}: {source}")]
    Parse {
        /// File being parsed
        filename: String,
        /// Parser error
        #[source]
        source: lopdf::Error,
    },
}

impl PdfError {
    /// Whether the failure should be reported to the caller as data rather than a fault.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::InvalidFilename(_))
    }
}

/// Errors from the bounded worker pool.
#[derive(thiserror::Error, Debug)]
pub enum PoolError {
    /// Every worker is busy and the queue is full.
    #[error("server busy: {workers} calls running and {queued} queued")]
    Saturated {
        /// Worker count
        workers: usize,
        /// Calls already waiting
        queued: usize,
    },

    /// The pool has been shut down.
    #[error("worker pool closed")]
    Closed,

    /// A blocking task panicked or was cancelled.
    #[error("worker task failed: {0}")]
    Join(String),
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Error from the PDF folder provider
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Worker pool rejected or lost the call
    #[error("{0}")]
    Pool(#[from] PoolError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// A list entry could not be normalized under the abort policy
    #[error("Entry {index} could not be normalized: {message}")]
    Normalize {
        /// Position of the entry in the upstream list
        index: usize,
        /// Normalization failure
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!(
                    "Rate limited by Semantic Scholar API. Please wait {:?} before retrying.",
                    retry_after
                )
            }
            Self::Client(ClientError::NotFound { resource }) => {
                format!("Not found: {resource}. Please check the ID is correct.")
            }
            Self::Pdf(err) if err.is_recoverable() => format!("Error: {err}"),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for PDF operations.
pub type PdfResult<T> = Result<T, PdfError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
