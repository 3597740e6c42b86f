//! Engine operations.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use swiftype_types::{ResultSet, SearchOptions};
use tracing::info;

use crate::error::ClientResult;
use crate::transport::{params1, segment, Transport};

/// Engines: named search indexes.
#[derive(Clone)]
pub struct Engines {
    transport: Arc<dyn Transport>,
}

impl Engines {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists all engines.
    pub async fn list(&self) -> ClientResult<Value> {
        self.transport.get("engines.json", Map::new()).await
    }

    /// Fetches one engine. Unknown ids fail with `NotFound`.
    pub async fn get(&self, engine_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        self.transport
            .get(&format!("engines/{engine_id}.json"), Map::new())
            .await
    }

    /// Creates an engine; the response carries the server-assigned id.
    pub async fn create(&self, name: &str) -> ClientResult<Value> {
        let engine = self
            .transport
            .post("engines.json", params1("engine", json!({ "name": name })))
            .await?;
        info!("Created engine: {}", name);
        Ok(engine)
    }

    /// Destroys an engine. Deleting an unknown id is an error.
    pub async fn destroy(&self, engine_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let response = self
            .transport
            .delete(&format!("engines/{engine_id}.json"), Map::new())
            .await?;
        info!("Destroyed engine: {}", engine_id);
        Ok(response)
    }

    /// Autocomplete query across every document type of the engine.
    pub async fn suggest(
        &self,
        engine_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        let engine_id = segment(engine_id)?;
        let response = self
            .transport
            .post(
                &format!("engines/{engine_id}/suggest.json"),
                options.to_params(query)?,
            )
            .await?;
        Ok(ResultSet::from_response(response)?)
    }

    /// Full-text query across every document type of the engine.
    pub async fn search(
        &self,
        engine_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        let engine_id = segment(engine_id)?;
        let response = self
            .transport
            .post(
                &format!("engines/{engine_id}/search.json"),
                options.to_params(query)?,
            )
            .await?;
        Ok(ResultSet::from_response(response)?)
    }
}
