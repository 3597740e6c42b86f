mod common;

use common::recording_client;
use pretty_assertions::assert_eq;
use serde_json::Map;
use swiftype_client::ClientError;
use swiftype_client::types::{Document, Pagination, SearchOptions};

// ── Opaque identifiers ──────────────────────────────────────────

#[tokio::test]
async fn every_identifier_position_is_escaped() {
    let (client, transport) = recording_client();
    transport.respond_with(serde_json::json!({}));
    transport.respond_with(serde_json::json!({}));
    transport.respond_with(serde_json::json!([]));

    client
        .search_document_type("e/1", "t?2", "q", &SearchOptions::default())
        .await
        .unwrap();
    client
        .update_document("e/1", "t?2", "d#3", Map::new())
        .await
        .unwrap();
    client
        .destroy_documents("e/1", "t?2", &["plain/id"])
        .await
        .unwrap();
    client
        .documents("e/1", "t?2", Pagination::default())
        .await
        .unwrap();
    client
        .create_or_update_document("e/1", "t?2", &Document::new("x"))
        .await
        .unwrap();
    client.recrawl_domain("e/1", "d%4").await.unwrap();
    client.log_clickthrough("e/1", "t?2", "q", "r").await.unwrap();

    let paths: Vec<String> = transport.calls().into_iter().map(|c| c.path).collect();
    assert_eq!(
        paths,
        vec![
            "engines/e%2F1/document_types/t%3F2/search.json",
            "engines/e%2F1/document_types/t%3F2/documents/d%233/update_fields.json",
            "engines/e%2F1/document_types/t%3F2/documents/bulk_destroy.json",
            "engines/e%2F1/document_types/t%3F2/documents.json",
            "engines/e%2F1/document_types/t%3F2/documents/create_or_update.json",
            "engines/e%2F1/domains/d%254/recrawl.json",
            "engines/e%2F1/document_types/t%3F2/analytics/log_clickthrough.json",
        ]
    );
}

#[tokio::test]
async fn bulk_destroy_ids_stay_verbatim_in_the_body() {
    let (client, transport) = recording_client();
    transport.respond_with(serde_json::json!([true]));

    client
        .destroy_documents("e1", "books", &["../x?y#z"])
        .await
        .unwrap();

    assert_eq!(
        transport.only_call().params,
        serde_json::json!({ "documents": ["../x?y#z"] })
    );
}

#[tokio::test]
async fn dot_segment_identifier_never_reaches_the_transport() {
    let (client, transport) = recording_client();

    let err = client.document("e1", "..", "d1").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidIdentifier(ref id) if id == ".."));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn analytics_engine_id_is_escaped_once() {
    let (client, transport) = recording_client();
    client
        .analytics_searches("a b", Default::default())
        .await
        .unwrap();
    assert_eq!(
        transport.only_call().path,
        "engines/a%20b/analytics/searches.json"
    );
}
