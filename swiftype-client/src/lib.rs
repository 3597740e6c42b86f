//! Client for the Swiftype search API.
//!
//! Every method maps one-to-one onto a REST endpoint:
//! - Engines and document types (create, list, fetch, destroy)
//! - Documents, singly and in bulk, including upserts and partial updates
//! - Search and suggest queries, engine-wide or per document type
//! - Analytics reports
//! - Crawled domains
//! - Clickthrough logging
//!
//! # Architecture
//!
//! Each resource group ([`Engines`], [`DocumentTypes`], [`Documents`],
//! [`Analytics`], [`Domains`], [`Clickthroughs`]) builds a path and a
//! parameter object and hands them to a shared [`Transport`]. [`Easy`]
//! composes the groups behind one value. [`HttpTransport`] sends requests with
//! reqwest; tests and embedders can supply their own transport through
//! [`Easy::with_transport`].
//!
//! Calls are never retried or cached. HTTP failures surface as
//! [`ClientError`] variants.
//!
//! # Example
//!
//! ```no_run
//! use swiftype_client::{ClientOptions, Config, Easy};
//! use swiftype_client::types::SearchOptions;
//!
//! # async fn run() -> swiftype_client::ClientResult<()> {
//! let config = Config::from_env();
//! let client = Easy::new(&config, ClientOptions::default())?;
//!
//! let results = client
//!     .search("my-engine", "cats", &SearchOptions::new().per_page(10))
//!     .await?;
//! for record in results.records("page") {
//!     println!("{}", record["title"]);
//! }
//! # Ok(())
//! # }
//! ```

mod analytics;
mod client;
mod clickthrough;
mod config;
mod credentials;
mod document;
mod document_type;
mod domain;
mod engine;
mod error;
mod http;
mod transport;

pub use analytics::Analytics;
pub use client::Easy;
pub use clickthrough::Clickthroughs;
pub use config::{Config, API_KEY_ENV, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use credentials::{Auth, ClientOptions, Credentials};
pub use document::Documents;
pub use document_type::DocumentTypes;
pub use domain::Domains;
pub use engine::Engines;
pub use error::{ClientError, ClientResult};
pub use http::HttpTransport;
pub use transport::{Method, Transport};

pub use swiftype_types as types;
