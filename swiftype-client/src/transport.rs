//! Transport abstraction.
//!
//! The method groups only build paths and parameter objects; sending them is
//! left to a [`Transport`]. [`HttpTransport`](crate::HttpTransport) is the
//! production implementation.

use std::borrow::Cow;
use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};

/// HTTP verb of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than a JSON body.
    pub fn uses_query(&self) -> bool {
        matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends one API call and returns the decoded JSON body.
///
/// `path` is relative to the API endpoint (e.g. `engines/foo.json`). `params`
/// may be empty. An empty response body decodes as `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Map<String, Value>,
    ) -> ClientResult<Value>;

    async fn get(&self, path: &str, params: Map<String, Value>) -> ClientResult<Value> {
        self.request(Method::Get, path, params).await
    }

    async fn post(&self, path: &str, params: Map<String, Value>) -> ClientResult<Value> {
        self.request(Method::Post, path, params).await
    }

    async fn put(&self, path: &str, params: Map<String, Value>) -> ClientResult<Value> {
        self.request(Method::Put, path, params).await
    }

    async fn delete(&self, path: &str, params: Map<String, Value>) -> ClientResult<Value> {
        self.request(Method::Delete, path, params).await
    }
}

/// Builds a one-key parameter object.
pub(crate) fn params1(key: &str, value: Value) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(key.to_string(), value);
    params
}

/// Percent-encodes an identifier as a single path segment.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped, so `/`, `?`, `#` and
/// `%` stay inside the segment. `.` and `..` are rejected because URL
/// resolution treats them as relative segments even when escaped.
pub(crate) fn segment(id: &str) -> ClientResult<Cow<'_, str>> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ClientError::InvalidIdentifier(id.to_string()));
    }
    Ok(urlencoding::encode(id))
}
