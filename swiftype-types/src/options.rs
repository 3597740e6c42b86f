//! Optional request parameters.
//!
//! Each option struct serializes to a JSON object that contains only the
//! fields that were set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Page selection for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Pagination {
    #[must_use]
    pub const fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self { page, per_page }
    }

    #[must_use]
    pub const fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: None,
        }
    }

    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Converts into request parameters.
    pub fn to_params(&self) -> Result<Map<String, Value>> {
        to_object(self)
    }
}

/// Optional analytics date window.
///
/// `start_date` is present only when `from` was given, `end_date` only when
/// `to` was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            start_date: from,
            end_date: to,
        }
    }

    #[must_use]
    pub const fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    #[must_use]
    pub const fn since(from: NaiveDate) -> Self {
        Self::new(Some(from), None)
    }

    #[must_use]
    pub const fn until(to: NaiveDate) -> Self {
        Self::new(None, Some(to))
    }

    /// Converts into request parameters (`YYYY-MM-DD` dates).
    pub fn to_params(&self) -> Result<Map<String, Value>> {
        to_object(self)
    }
}

/// Options for search and suggest queries.
///
/// Named fields cover the common query parameters. Anything else goes in
/// `extra`, which is flattened into the request. The options are merged on
/// top of `{"q": query}`, so an `extra` entry named `q` replaces the query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_fields: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_fields: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functional_boosts: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn document_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }

    #[must_use]
    pub fn facets(mut self, facets: Value) -> Self {
        self.facets = Some(facets);
        self
    }

    /// Sets an arbitrary parameter not covered by a named field.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds the query parameters: `{"q": query}` with the options merged on top.
    pub fn to_params(&self, query: &str) -> Result<Map<String, Value>> {
        let mut params = Map::new();
        params.insert("q".to_string(), Value::String(query.to_string()));
        params.extend(to_object(self)?);
        Ok(params)
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidOptions(format!(
            "expected options to serialize to an object, got {other}"
        ))),
    }
}
