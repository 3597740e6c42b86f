//! Clickthrough logging.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ClientResult;
use crate::transport::{segment, Transport};

#[derive(Clone)]
pub struct Clickthroughs {
    transport: Arc<dyn Transport>,
}

impl Clickthroughs {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Records that the result `id` was clicked for query `q`. The response
    /// body is discarded.
    pub async fn log(
        &self,
        engine_id: &str,
        document_type_id: &str,
        q: &str,
        id: &str,
    ) -> ClientResult<()> {
        let engine_id = segment(engine_id)?;
        let document_type_id = segment(document_type_id)?;
        let mut params = Map::new();
        params.insert("q".to_string(), Value::String(q.to_string()));
        params.insert("id".to_string(), Value::String(id.to_string()));

        self.transport
            .post(
                &format!(
                    "engines/{engine_id}/document_types/{document_type_id}/analytics/log_clickthrough.json"
                ),
                params,
            )
            .await?;
        debug!("Logged clickthrough for {} on {}", id, document_type_id);
        Ok(())
    }
}
