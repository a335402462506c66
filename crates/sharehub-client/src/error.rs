//! Error types for the ShareHub HTTP client.

use thiserror::Error;

use sharehub_core::error::{AppError, ErrorKind};

/// Errors that can occur when talking to the ShareHub backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    ///
    /// `message` is the body's JSON `message` field, or the raw body text
    /// when it has none; `from_body` tells the two apart.
    #[error("Server error ({status}): {message}")]
    ServerError {
        status: u16,
        message: String,
        from_body: bool,
    },

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// The `message` field of the server's JSON error body, if it had one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ServerError {
                message,
                from_body: true,
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let kind = match &err {
            ClientError::Request(_) | ClientError::ServerError { .. } => ErrorKind::ExternalService,
            ClientError::ParseError(_) => ErrorKind::Serialization,
            ClientError::InvalidUrl(_) => ErrorKind::Configuration,
            ClientError::FileNotFound(_) | ClientError::Io(_) => ErrorKind::Storage,
        };
        let message = err.to_string();
        AppError::with_source(kind, message, err)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
