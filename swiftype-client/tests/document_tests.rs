mod common;

use common::recording_client;
use pretty_assertions::assert_eq;
use serde_json::{json, Map};
use swiftype_client::{ClientError, Method};
use swiftype_client::types::{Document, DocumentUpdate, FieldType, Pagination};

const BASE: &str = "engines/e1/document_types/books/documents";

fn dune() -> Document {
    Document::new("1").field("title", "Dune", FieldType::String)
}

fn dune_json() -> serde_json::Value {
    json!({
        "external_id": "1",
        "fields": [ { "name": "title", "value": "Dune", "type": "string" } ]
    })
}

// ── Listing ─────────────────────────────────────────────────────

#[tokio::test]
async fn documents_without_pagination_sends_no_keys() {
    let (client, transport) = recording_client();
    client
        .documents("e1", "books", Pagination::default())
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Get);
    assert_eq!(call.path, format!("{BASE}.json"));
    assert_eq!(call.params, json!({}));
}

#[tokio::test]
async fn documents_with_pagination_sends_supplied_keys() {
    let (client, transport) = recording_client();
    client
        .documents("e1", "books", Pagination::page(3).with_per_page(25))
        .await
        .unwrap();

    assert_eq!(
        transport.only_call().params,
        json!({ "page": 3, "per_page": 25 })
    );
}

#[tokio::test]
async fn documents_with_per_page_only() {
    let (client, transport) = recording_client();
    client
        .documents("e1", "books", Pagination::new(None, Some(10)))
        .await
        .unwrap();

    assert_eq!(transport.only_call().params, json!({ "per_page": 10 }));
}

// ── Single-document CRUD ────────────────────────────────────────

#[tokio::test]
async fn document_fetches_by_id() {
    let (client, transport) = recording_client();
    client.document("e1", "books", "1").await.unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Get);
    assert_eq!(call.path, format!("{BASE}/1.json"));
}

#[tokio::test]
async fn create_document_wraps_document() {
    let (client, transport) = recording_client();
    client.create_document("e1", "books", &dune()).await.unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, format!("{BASE}.json"));
    assert_eq!(call.params, json!({ "document": dune_json() }));
}

#[tokio::test]
async fn destroy_document_deletes() {
    let (client, transport) = recording_client();
    client.destroy_document("e1", "books", "1").await.unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Delete);
    assert_eq!(call.path, format!("{BASE}/1.json"));
}

#[tokio::test]
async fn create_or_update_document_posts_upsert() {
    let (client, transport) = recording_client();
    client
        .create_or_update_document("e1", "books", &dune())
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, format!("{BASE}/create_or_update.json"));
    assert_eq!(call.params, json!({ "document": dune_json() }));
}

#[tokio::test]
async fn update_document_puts_only_named_fields() {
    let (client, transport) = recording_client();
    let mut fields = Map::new();
    fields.insert("pages".to_string(), json!(500));

    client
        .update_document("e1", "books", "1", fields)
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Put);
    assert_eq!(call.path, format!("{BASE}/1/update_fields.json"));
    assert_eq!(call.params, json!({ "fields": { "pages": 500 } }));
}

// ── Bulk ────────────────────────────────────────────────────────

#[tokio::test]
async fn create_documents_posts_array_and_returns_per_item_results() {
    let (client, transport) = recording_client();
    transport.respond_with(json!([true, false]));

    let docs = vec![dune(), Document::new("2")];
    let results = client.create_documents("e1", "books", &docs).await.unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, format!("{BASE}/bulk_create.json"));
    assert_eq!(
        call.params,
        json!({ "documents": [dune_json(), { "external_id": "2", "fields": [] }] })
    );
    assert_eq!(results, vec![json!(true), json!(false)]);
}

#[tokio::test]
async fn destroy_documents_posts_ids() {
    let (client, transport) = recording_client();
    transport.respond_with(json!([true, true]));

    let results = client
        .destroy_documents("e1", "books", &["a", "b"])
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, format!("{BASE}/bulk_destroy.json"));
    assert_eq!(call.params, json!({ "documents": ["a", "b"] }));
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn destroy_documents_accepts_owned_ids() {
    let (client, transport) = recording_client();
    transport.respond_with(json!([true]));

    let ids = vec!["x".to_string()];
    client.destroy_documents("e1", "books", &ids).await.unwrap();

    assert_eq!(transport.only_call().params, json!({ "documents": ["x"] }));
}

#[tokio::test]
async fn create_or_update_documents_posts_bulk_upsert() {
    let (client, transport) = recording_client();
    transport.respond_with(json!([true]));

    client
        .create_or_update_documents("e1", "books", &[dune()])
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.path, format!("{BASE}/bulk_create_or_update.json"));
    assert_eq!(call.params, json!({ "documents": [dune_json()] }));
}

#[tokio::test]
async fn update_documents_puts_bulk_update() {
    let (client, transport) = recording_client();
    transport.respond_with(json!([true, false]));

    let updates = vec![
        DocumentUpdate::new("1").set("pages", 500),
        DocumentUpdate::new("2").set("title", "Children of Dune"),
    ];
    let results = client
        .update_documents("e1", "books", &updates)
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Put);
    assert_eq!(call.path, format!("{BASE}/bulk_update.json"));
    assert_eq!(
        call.params,
        json!({
            "documents": [
                { "external_id": "1", "fields": { "pages": 500 } },
                { "external_id": "2", "fields": { "title": "Children of Dune" } }
            ]
        })
    );
    assert_eq!(results[1], json!(false));
}

#[tokio::test]
async fn bulk_response_must_be_an_array() {
    let (client, transport) = recording_client();
    transport.respond_with(json!({ "error": "nope" }));

    let err = client
        .create_documents("e1", "books", &[dune()])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn bulk_call_is_a_single_request() {
    let (client, transport) = recording_client();
    transport.respond_with(json!([true, true, true]));

    let docs: Vec<Document> = (0..3).map(|i| Document::new(i.to_string())).collect();
    client.create_documents("e1", "books", &docs).await.unwrap();

    assert_eq!(transport.calls().len(), 1);
}
