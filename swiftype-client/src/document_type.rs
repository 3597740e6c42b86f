//! Document type operations, scoped under an engine.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use swiftype_types::{ResultSet, SearchOptions};
use tracing::info;

use crate::error::ClientResult;
use crate::transport::{params1, segment, Transport};

#[derive(Clone)]
pub struct DocumentTypes {
    transport: Arc<dyn Transport>,
}

impl DocumentTypes {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, engine_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        self.transport
            .get(&format!("engines/{engine_id}/document_types.json"), Map::new())
            .await
    }

    pub async fn get(&self, engine_id: &str, document_type_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        self.transport
            .get(
                &format!("engines/{engine_id}/document_types/{document_type_id}.json"),
                Map::new(),
            )
            .await
    }

    pub async fn create(&self, engine_id: &str, name: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type = self
            .transport
            .post(
                &format!("engines/{engine_id}/document_types.json"),
                params1("document_type", json!({ "name": name })),
            )
            .await?;
        info!("Created document type {} in engine {}", name, engine_id);
        Ok(document_type)
    }

    pub async fn destroy(&self, engine_id: &str, document_type_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let response = self
            .transport
            .delete(
                &format!("engines/{engine_id}/document_types/{document_type_id}.json"),
                Map::new(),
            )
            .await?;
        info!(
            "Destroyed document type {} in engine {}",
            document_type_id, engine_id
        );
        Ok(response)
    }

    /// Autocomplete query limited to one document type.
    pub async fn suggest(
        &self,
        engine_id: &str,
        document_type_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let response = self
            .transport
            .post(
                &format!("engines/{engine_id}/document_types/{document_type_id}/suggest.json"),
                options.to_params(query)?,
            )
            .await?;
        Ok(ResultSet::from_response(response)?)
    }

    /// Full-text query limited to one document type.
    pub async fn search(
        &self,
        engine_id: &str,
        document_type_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let response = self
            .transport
            .post(
                &format!("engines/{engine_id}/document_types/{document_type_id}/search.json"),
                options.to_params(query)?,
            )
            .await?;
        Ok(ResultSet::from_response(response)?)
    }
}
