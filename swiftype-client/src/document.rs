//! Document operations, single and bulk.
//!
//! Bulk calls send one request carrying an array and return the server's
//! per-item results in input order, so callers can match failures to the
//! documents that caused them.

use std::sync::Arc;

use serde_json::{Map, Value};
use swiftype_types::{Document, DocumentUpdate, Pagination};
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};
use crate::transport::{params1, segment, Transport};

#[derive(Clone)]
pub struct Documents {
    transport: Arc<dyn Transport>,
}

impl Documents {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists documents. Unset pagination fields are left to the server.
    pub async fn list(
        &self,
        engine_id: &str,
        document_type_id: &str,
        pagination: Pagination,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        self.transport
            .get(
                &format!("{}.json", base(&engine_id, &document_type_id)),
                pagination.to_params()?,
            )
            .await
    }

    pub async fn get(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_id: &str,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let document_id = segment(document_id)?;
        self.transport
            .get(
                &format!("{}/{document_id}.json", base(&engine_id, &document_type_id)),
                Map::new(),
            )
            .await
    }

    pub async fn create(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document: &Document,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let created = self
            .transport
            .post(
                &format!("{}.json", base(&engine_id, &document_type_id)),
                params1("document", serde_json::to_value(document)?),
            )
            .await?;
        info!(
            "Created document {} in {}/{}",
            document.external_id, engine_id, document_type_id
        );
        Ok(created)
    }

    /// Creates many documents in one call.
    pub async fn create_bulk(
        &self,
        engine_id: &str,
        document_type_id: &str,
        documents: &[Document],
    ) -> ClientResult<Vec<Value>> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        debug!("Bulk creating {} documents", documents.len());
        let response = self
            .transport
            .post(
                &format!("{}/bulk_create.json", base(&engine_id, &document_type_id)),
                params1("documents", serde_json::to_value(documents)?),
            )
            .await?;
        bulk_results(response, documents.len())
    }

    pub async fn destroy(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_id: &str,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let document_id = segment(document_id)?;
        let response = self
            .transport
            .delete(
                &format!("{}/{document_id}.json", base(&engine_id, &document_type_id)),
                Map::new(),
            )
            .await?;
        info!(
            "Destroyed document {} in {}/{}",
            document_id, engine_id, document_type_id
        );
        Ok(response)
    }

    /// Destroys many documents by external id in one call.
    pub async fn destroy_bulk<S: AsRef<str> + Sync>(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_ids: &[S],
    ) -> ClientResult<Vec<Value>> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let ids: Vec<Value> = document_ids
            .iter()
            .map(|id| Value::String(id.as_ref().to_string()))
            .collect();
        debug!("Bulk destroying {} documents", ids.len());
        let response = self
            .transport
            .post(
                &format!("{}/bulk_destroy.json", base(&engine_id, &document_type_id)),
                params1("documents", Value::Array(ids)),
            )
            .await?;
        bulk_results(response, document_ids.len())
    }

    /// Creates the document, or replaces it if the external id already exists.
    pub async fn create_or_update(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document: &Document,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        self.transport
            .post(
                &format!("{}/create_or_update.json", base(&engine_id, &document_type_id)),
                params1("document", serde_json::to_value(document)?),
            )
            .await
    }

    pub async fn create_or_update_bulk(
        &self,
        engine_id: &str,
        document_type_id: &str,
        documents: &[Document],
    ) -> ClientResult<Vec<Value>> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        debug!("Bulk upserting {} documents", documents.len());
        let response = self
            .transport
            .post(
                &format!(
                    "{}/bulk_create_or_update.json",
                    base(&engine_id, &document_type_id)
                ),
                params1("documents", serde_json::to_value(documents)?),
            )
            .await?;
        bulk_results(response, documents.len())
    }

    /// Changes only the named fields of a document.
    pub async fn update(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_id: &str,
        fields: Map<String, Value>,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let document_id = segment(document_id)?;
        self.transport
            .put(
                &format!(
                    "{}/{document_id}/update_fields.json",
                    base(&engine_id, &document_type_id)
                ),
                params1("fields", Value::Object(fields)),
            )
            .await
    }

    pub async fn update_bulk(
        &self,
        engine_id: &str,
        document_type_id: &str,
        updates: &[DocumentUpdate],
    ) -> ClientResult<Vec<Value>> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        debug!("Bulk updating {} documents", updates.len());
        let response = self
            .transport
            .put(
                &format!("{}/bulk_update.json", base(&engine_id, &document_type_id)),
                params1("documents", serde_json::to_value(updates)?),
            )
            .await?;
        bulk_results(response, updates.len())
    }
}

fn base(engine_id: &str, document_type_id: &str) -> String {
    format!("engines/{engine_id}/document_types/{document_type_id}/documents")
}

fn bulk_results(response: Value, sent: usize) -> ClientResult<Vec<Value>> {
    match response {
        Value::Array(results) => {
            if results.len() != sent {
                debug!(
                    "Bulk response has {} results for {} items",
                    results.len(),
                    sent
                );
            }
            Ok(results)
        }
        other => Err(ClientError::MalformedResponse(format!(
            "expected an array of per-item results, got {other}"
        ))),
    }
}
