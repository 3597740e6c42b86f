//! Value types for the Swiftype search API client.
//!
//! This crate holds everything that crosses the wire but does not talk to
//! the network itself:
//! - Documents and their typed fields
//! - Request options (search options, pagination, analytics date ranges)
//! - The result set returned by search and suggest queries
//!
//! Options serialize only the fields that are set, so an unset page or date
//! leaves the choice of default to the server.

mod document;
mod options;
mod result_set;

pub use document::{Document, DocumentField, DocumentUpdate, FieldType};
pub use options::{DateRange, Pagination, SearchOptions};
pub use result_set::{ResultInfo, ResultSet};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or decoding API values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
