//! Documents indexed into a document type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Index type of a document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Exact-match string, not analyzed.
    String,
    /// Full-text analyzed content.
    Text,
    /// Enumerated value (or array of values) used for filtering and facets.
    Enum,
    Integer,
    Float,
    /// ISO 8601 date.
    Date,
    /// Geographic point (`{"lat": .., "lon": ..}`).
    Location,
}

/// A single named field of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentField {
    pub name: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// A document as sent to the create and upsert endpoints.
///
/// `external_id` is the caller's identifier; the server decides whether a
/// document with that id already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub external_id: String,
    #[serde(default)]
    pub fields: Vec<DocumentField>,
}

impl Document {
    /// Creates a document with no fields.
    #[must_use]
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field, consuming and returning the document.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        field_type: FieldType,
    ) -> Self {
        self.fields.push(DocumentField {
            name: name.into(),
            value: value.into(),
            field_type,
        });
        self
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&DocumentField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A partial update for one document in a bulk update call.
///
/// Only the named fields are changed server-side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    pub external_id: String,
    pub fields: Map<String, Value>,
}

impl DocumentUpdate {
    #[must_use]
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            fields: Map::new(),
        }
    }

    /// Sets a field value, consuming and returning the update.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}
