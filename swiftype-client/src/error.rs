//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while calling the Swiftype API.
///
/// HTTP status failures are mapped to a variant per status class; nothing is
/// retried or recovered locally.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Identifier that cannot be sent as a path segment (empty, `.` or `..`).
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// 401: missing or wrong API key / access token.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// 403
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 404: unknown engine, document type, document or domain.
    #[error("not found: {0}")]
    NotFound(String),

    /// 409
    #[error("record already exists: {0}")]
    AlreadyExists(String),

    /// 400
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 422: validation failure.
    #[error("unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Types(#[from] swiftype_types::Error),
}

impl ClientError {
    /// Maps a non-success status and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => ClientError::BadRequest(body),
            401 => ClientError::InvalidCredentials(body),
            403 => ClientError::Forbidden(body),
            404 => ClientError::NotFound(body),
            409 => ClientError::AlreadyExists(body),
            422 => ClientError::Unprocessable(body),
            _ => ClientError::UnexpectedStatus { status, body },
        }
    }

    /// Returns the HTTP status this error was produced from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::BadRequest(_) => Some(400),
            ClientError::InvalidCredentials(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::AlreadyExists(_) => Some(409),
            ClientError::Unprocessable(_) => Some(422),
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true for 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
