//! The `Easy` client facade.

use std::sync::Arc;

use serde_json::{Map, Value};
use swiftype_types::{DateRange, Document, DocumentUpdate, Pagination, ResultSet, SearchOptions};

use crate::analytics::Analytics;
use crate::clickthrough::Clickthroughs;
use crate::config::Config;
use crate::credentials::{ClientOptions, Credentials};
use crate::document::Documents;
use crate::document_type::DocumentTypes;
use crate::domain::Domains;
use crate::engine::Engines;
use crate::error::ClientResult;
use crate::http::HttpTransport;
use crate::transport::Transport;

/// Swiftype API client.
///
/// Composes one component per resource group, all sharing a single
/// transport. Every operation is also available directly on the client.
/// Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct Easy {
    credentials: Credentials,
    engines: Engines,
    document_types: DocumentTypes,
    documents: Documents,
    analytics: Analytics,
    domains: Domains,
    clickthroughs: Clickthroughs,
}

impl Easy {
    /// Creates a client that talks HTTP to `config.endpoint`.
    ///
    /// `options` override the config's default API key for this client only.
    pub fn new(config: &Config, options: ClientOptions) -> ClientResult<Self> {
        let credentials = Credentials::new(config.api_key.clone(), options);
        let transport = HttpTransport::new(config, credentials.clone())?;
        Ok(Self::with_transport(credentials, Arc::new(transport)))
    }

    /// Creates a client over any transport.
    ///
    /// `credentials` are only what [`api_key`](Self::api_key) and
    /// [`platform_access_token`](Self::platform_access_token) report; they are
    /// not applied to `transport`, which authenticates with whatever it was
    /// built with. Give both the same credentials. [`Easy::new`] does.
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            engines: Engines::new(transport.clone()),
            document_types: DocumentTypes::new(transport.clone()),
            documents: Documents::new(transport.clone()),
            analytics: Analytics::new(transport.clone()),
            domains: Domains::new(transport.clone()),
            clickthroughs: Clickthroughs::new(transport),
        }
    }

    /// The API key in effect: the instance override, else the default.
    pub fn api_key(&self) -> Option<&str> {
        self.credentials.api_key()
    }

    pub fn platform_access_token(&self) -> Option<&str> {
        self.credentials.platform_access_token()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn engine_ops(&self) -> &Engines {
        &self.engines
    }

    pub fn document_type_ops(&self) -> &DocumentTypes {
        &self.document_types
    }

    pub fn document_ops(&self) -> &Documents {
        &self.documents
    }

    pub fn analytics_ops(&self) -> &Analytics {
        &self.analytics
    }

    pub fn domain_ops(&self) -> &Domains {
        &self.domains
    }

    pub fn clickthrough_ops(&self) -> &Clickthroughs {
        &self.clickthroughs
    }

    // ── Engines ─────────────────────────────────────────────────

    pub async fn engines(&self) -> ClientResult<Value> {
        self.engines.list().await
    }

    pub async fn engine(&self, engine_id: &str) -> ClientResult<Value> {
        self.engines.get(engine_id).await
    }

    pub async fn create_engine(&self, name: &str) -> ClientResult<Value> {
        self.engines.create(name).await
    }

    pub async fn destroy_engine(&self, engine_id: &str) -> ClientResult<Value> {
        self.engines.destroy(engine_id).await
    }

    pub async fn suggest(
        &self,
        engine_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        self.engines.suggest(engine_id, query, options).await
    }

    pub async fn search(
        &self,
        engine_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        self.engines.search(engine_id, query, options).await
    }

    // ── Document types ──────────────────────────────────────────

    pub async fn document_types(&self, engine_id: &str) -> ClientResult<Value> {
        self.document_types.list(engine_id).await
    }

    pub async fn document_type(
        &self,
        engine_id: &str,
        document_type_id: &str,
    ) -> ClientResult<Value> {
        self.document_types.get(engine_id, document_type_id).await
    }

    pub async fn create_document_type(&self, engine_id: &str, name: &str) -> ClientResult<Value> {
        self.document_types.create(engine_id, name).await
    }

    pub async fn destroy_document_type(
        &self,
        engine_id: &str,
        document_type_id: &str,
    ) -> ClientResult<Value> {
        self.document_types
            .destroy(engine_id, document_type_id)
            .await
    }

    pub async fn suggest_document_type(
        &self,
        engine_id: &str,
        document_type_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        self.document_types
            .suggest(engine_id, document_type_id, query, options)
            .await
    }

    pub async fn search_document_type(
        &self,
        engine_id: &str,
        document_type_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> ClientResult<ResultSet> {
        self.document_types
            .search(engine_id, document_type_id, query, options)
            .await
    }

    // ── Documents ───────────────────────────────────────────────

    pub async fn documents(
        &self,
        engine_id: &str,
        document_type_id: &str,
        pagination: Pagination,
    ) -> ClientResult<Value> {
        self.documents
            .list(engine_id, document_type_id, pagination)
            .await
    }

    pub async fn document(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_id: &str,
    ) -> ClientResult<Value> {
        self.documents
            .get(engine_id, document_type_id, document_id)
            .await
    }

    pub async fn create_document(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document: &Document,
    ) -> ClientResult<Value> {
        self.documents
            .create(engine_id, document_type_id, document)
            .await
    }

    pub async fn create_documents(
        &self,
        engine_id: &str,
        document_type_id: &str,
        documents: &[Document],
    ) -> ClientResult<Vec<Value>> {
        self.documents
            .create_bulk(engine_id, document_type_id, documents)
            .await
    }

    pub async fn destroy_document(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_id: &str,
    ) -> ClientResult<Value> {
        self.documents
            .destroy(engine_id, document_type_id, document_id)
            .await
    }

    pub async fn destroy_documents<S: AsRef<str> + Sync>(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_ids: &[S],
    ) -> ClientResult<Vec<Value>> {
        self.documents
            .destroy_bulk(engine_id, document_type_id, document_ids)
            .await
    }

    pub async fn create_or_update_document(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document: &Document,
    ) -> ClientResult<Value> {
        self.documents
            .create_or_update(engine_id, document_type_id, document)
            .await
    }

    pub async fn create_or_update_documents(
        &self,
        engine_id: &str,
        document_type_id: &str,
        documents: &[Document],
    ) -> ClientResult<Vec<Value>> {
        self.documents
            .create_or_update_bulk(engine_id, document_type_id, documents)
            .await
    }

    pub async fn update_document(
        &self,
        engine_id: &str,
        document_type_id: &str,
        document_id: &str,
        fields: Map<String, Value>,
    ) -> ClientResult<Value> {
        self.documents
            .update(engine_id, document_type_id, document_id, fields)
            .await
    }

    pub async fn update_documents(
        &self,
        engine_id: &str,
        document_type_id: &str,
        updates: &[DocumentUpdate],
    ) -> ClientResult<Vec<Value>> {
        self.documents
            .update_bulk(engine_id, document_type_id, updates)
            .await
    }

    // ── Analytics ───────────────────────────────────────────────

    pub async fn analytics_searches(
        &self,
        engine_id: &str,
        range: DateRange,
    ) -> ClientResult<Value> {
        self.analytics.searches(engine_id, range).await
    }

    pub async fn analytics_autoselects(
        &self,
        engine_id: &str,
        range: DateRange,
    ) -> ClientResult<Value> {
        self.analytics.autoselects(engine_id, range).await
    }

    pub async fn analytics_top_queries(
        &self,
        engine_id: &str,
        pagination: Pagination,
    ) -> ClientResult<Value> {
        self.analytics.top_queries(engine_id, pagination).await
    }

    pub async fn analytics_top_queries_in_range(
        &self,
        engine_id: &str,
        range: DateRange,
    ) -> ClientResult<Value> {
        self.analytics.top_queries_in_range(engine_id, range).await
    }

    pub async fn analytics_top_no_result_queries(
        &self,
        engine_id: &str,
        range: DateRange,
    ) -> ClientResult<Value> {
        self.analytics.top_no_result_queries(engine_id, range).await
    }

    // ── Domains ─────────────────────────────────────────────────

    pub async fn domains(&self, engine_id: &str) -> ClientResult<Value> {
        self.domains.list(engine_id).await
    }

    pub async fn domain(&self, engine_id: &str, domain_id: &str) -> ClientResult<Value> {
        self.domains.get(engine_id, domain_id).await
    }

    pub async fn create_domain(&self, engine_id: &str, url: &str) -> ClientResult<Value> {
        self.domains.create(engine_id, url).await
    }

    pub async fn destroy_domain(&self, engine_id: &str, domain_id: &str) -> ClientResult<Value> {
        self.domains.destroy(engine_id, domain_id).await
    }

    pub async fn recrawl_domain(&self, engine_id: &str, domain_id: &str) -> ClientResult<Value> {
        self.domains.recrawl(engine_id, domain_id).await
    }

    pub async fn crawl_url(
        &self,
        engine_id: &str,
        domain_id: &str,
        url: &str,
    ) -> ClientResult<Value> {
        self.domains.crawl_url(engine_id, domain_id, url).await
    }

    // ── Clickthroughs ───────────────────────────────────────────

    pub async fn log_clickthrough(
        &self,
        engine_id: &str,
        document_type_id: &str,
        q: &str,
        id: &str,
    ) -> ClientResult<()> {
        self.clickthroughs
            .log(engine_id, document_type_id, q, id)
            .await
    }
}

impl std::fmt::Debug for Easy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Easy")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
