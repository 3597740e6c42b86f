//! Search and suggest results.
//!
//! A response looks like:
//!
//! ```json
//! {
//!   "records": { "books": [ { "title": "..." } ] },
//!   "info":    { "books": { "query": "...", "current_page": 1, "num_pages": 3,
//!                           "per_page": 20, "total_result_count": 57, "facets": {} } },
//!   "errors":  {}
//! }
//! ```
//!
//! Records and info are keyed by document type. Every top-level key is
//! optional; a missing key decodes as an empty collection, and a null
//! per-type entry as empty records (or no info).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Pagination and facet metadata for one document type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub num_pages: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
    #[serde(default)]
    pub total_result_count: Option<u64>,
    #[serde(default)]
    pub facets: Option<Value>,
}

/// A decoded page of search or suggest results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    records: BTreeMap<String, Vec<Value>>,
    info: BTreeMap<String, ResultInfo>,
    errors: Map<String, Value>,
    raw: Value,
}

impl ResultSet {
    /// Builds a result set from a decoded response body.
    ///
    /// Fails when the body is not a JSON object or when a present key has
    /// the wrong shape. Absent keys are fine.
    pub fn from_response(response: Value) -> Result<Self> {
        let Value::Object(body) = &response else {
            return Err(Error::MalformedResponse(format!(
                "expected a JSON object, got {}",
                kind(&response)
            )));
        };

        let records = match body.get("records") {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(value @ Value::Object(_)) => {
                serde_json::from_value::<BTreeMap<String, Option<Vec<Value>>>>(value.clone())
                    .map_err(|e| Error::MalformedResponse(format!("records: {e}")))?
                    .into_iter()
                    .map(|(doc_type, records)| (doc_type, records.unwrap_or_default()))
                    .collect()
            }
            Some(other) => {
                return Err(Error::MalformedResponse(format!(
                    "records: expected an object, got {}",
                    kind(other)
                )));
            }
        };

        let info = match body.get("info") {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(value @ Value::Object(_)) => {
                serde_json::from_value::<BTreeMap<String, Option<ResultInfo>>>(value.clone())
                    .map_err(|e| Error::MalformedResponse(format!("info: {e}")))?
                    .into_iter()
                    .filter_map(|(doc_type, info)| info.map(|info| (doc_type, info)))
                    .collect()
            }
            Some(other) => {
                return Err(Error::MalformedResponse(format!(
                    "info: expected an object, got {}",
                    kind(other)
                )));
            }
        };

        let errors = match body.get("errors") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        Ok(Self {
            records,
            info,
            errors,
            raw: response,
        })
    }

    /// Records returned for a document type, empty if the type is absent.
    pub fn records(&self, document_type: &str) -> &[Value] {
        self.records
            .get(document_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All records grouped by document type.
    pub fn all_records(&self) -> &BTreeMap<String, Vec<Value>> {
        &self.records
    }

    /// Document types present in the response, in sorted order.
    pub fn document_types(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn info(&self, document_type: &str) -> Option<&ResultInfo> {
        self.info.get(document_type)
    }

    pub fn facets(&self, document_type: &str) -> Option<&Value> {
        self.info(document_type).and_then(|i| i.facets.as_ref())
    }

    /// Per-request errors reported by the server (e.g. unknown filter field).
    pub fn errors(&self) -> &Map<String, Value> {
        &self.errors
    }

    /// Current page. All document types share the same page.
    pub fn current_page(&self) -> Option<u64> {
        self.info.values().find_map(|i| i.current_page)
    }

    pub fn per_page(&self) -> Option<u64> {
        self.info.values().find_map(|i| i.per_page)
    }

    /// Number of pages needed to exhaust the largest document type.
    pub fn num_pages(&self) -> Option<u64> {
        self.info.values().filter_map(|i| i.num_pages).max()
    }

    pub fn total_result_count(&self, document_type: &str) -> Option<u64> {
        self.info(document_type).and_then(|i| i.total_result_count)
    }

    /// Sum of total result counts across all document types.
    pub fn total_result_count_all(&self) -> u64 {
        self.info
            .values()
            .filter_map(|i| i.total_result_count)
            .sum()
    }

    /// True when no document type returned any record.
    pub fn is_empty(&self) -> bool {
        self.records.values().all(Vec::is_empty)
    }

    /// The undecoded response body.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl TryFrom<Value> for ResultSet {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_response(value)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
