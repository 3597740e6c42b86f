//! Analytics reports. All calls are read-only.

use std::sync::Arc;

use serde_json::Value;
use swiftype_types::{DateRange, Pagination};

use crate::error::ClientResult;
use crate::transport::{segment, Transport};

#[derive(Clone)]
pub struct Analytics {
    transport: Arc<dyn Transport>,
}

impl Analytics {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Daily search counts.
    pub async fn searches(&self, engine_id: &str, range: DateRange) -> ClientResult<Value> {
        self.report(engine_id, "searches", range).await
    }

    /// Daily autoselect (suggestion clicked) counts.
    pub async fn autoselects(&self, engine_id: &str, range: DateRange) -> ClientResult<Value> {
        self.report(engine_id, "autoselects", range).await
    }

    pub async fn top_queries(
        &self,
        engine_id: &str,
        pagination: Pagination,
    ) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        self.transport
            .get(
                &format!("engines/{engine_id}/analytics/top_queries.json"),
                pagination.to_params()?,
            )
            .await
    }

    pub async fn top_queries_in_range(
        &self,
        engine_id: &str,
        range: DateRange,
    ) -> ClientResult<Value> {
        self.report(engine_id, "top_queries_in_range", range).await
    }

    /// Most frequent queries that returned nothing.
    pub async fn top_no_result_queries(
        &self,
        engine_id: &str,
        range: DateRange,
    ) -> ClientResult<Value> {
        self.report(engine_id, "top_no_result_queries_in_range", range)
            .await
    }

    async fn report(&self, engine_id: &str, report: &str, range: DateRange) -> ClientResult<Value> {
        let engine_id = segment(engine_id)?;
        self.transport
            .get(
                &format!("engines/{engine_id}/analytics/{report}.json"),
                range.to_params()?,
            )
            .await
    }
}
