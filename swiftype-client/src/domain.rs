//! Crawled domains of an engine.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::ClientResult;
use crate::transport::{params1, segment, Transport};

#[derive(Clone)]
pub struct Domains {
    transport: Arc<dyn Transport>,
}

impl Domains {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, engine_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        self.transport
            .get(&format!("engines/{engine_id}/domains.json"), Map::new())
            .await
    }

    pub async fn get(&self, engine_id: &str, domain_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let domain_id = segment(domain_id)?;
        self.transport
            .get(
                &format!("engines/{engine_id}/domains/{domain_id}.json"),
                Map::new(),
            )
            .await
    }

    /// Submits a site for crawling.
    pub async fn create(&self, engine_id: &str, url: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let domain = self
            .transport
            .post(
                &format!("engines/{engine_id}/domains.json"),
                params1("domain", json!({ "submitted_url": url })),
            )
            .await?;
        info!("Submitted domain {} to engine {}", url, engine_id);
        Ok(domain)
    }

    pub async fn destroy(&self, engine_id: &str, domain_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let domain_id = segment(domain_id)?;
        let response = self
            .transport
            .delete(
                &format!("engines/{engine_id}/domains/{domain_id}.json"),
                Map::new(),
            )
            .await?;
        info!("Destroyed domain {} in engine {}", domain_id, engine_id);
        Ok(response)
    }

    /// Schedules a full recrawl of the domain.
    pub async fn recrawl(&self, engine_id: &str, domain_id: &str) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let domain_id = segment(domain_id)?;
        self.transport
            .put(
                &format!("engines/{engine_id}/domains/{domain_id}/recrawl.json"),
                Map::new(),
            )
            .await
    }

    /// Crawls (or recrawls) a single URL of the domain.
    pub async fn crawl_url(
        &self,
        engine_id: &str,
        domain_id: &str,
        url: &str,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        let domain_id = segment(domain_id)?;
        self.transport
            .put(
                &format!("engines/{engine_id}/domains/{domain_id}/crawl_url.json"),
                params1("url", Value::String(url.to_string())),
            )
            .await
    }
}
