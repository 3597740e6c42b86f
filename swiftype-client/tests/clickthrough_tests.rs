mod common;

use common::recording_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use swiftype_client::{ClientError, Method};

#[tokio::test]
async fn log_clickthrough_posts_query_and_id() {
    let (client, transport) = recording_client();
    transport.respond_with(serde_json::Value::Null);

    client
        .log_clickthrough("e1", "books", "dune", "doc-42")
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Post);
    assert_eq!(
        call.path,
        "engines/e1/document_types/books/analytics/log_clickthrough.json"
    );
    assert_eq!(call.params, json!({ "q": "dune", "id": "doc-42" }));
}

#[tokio::test]
async fn log_clickthrough_propagates_failure() {
    let (client, transport) = recording_client();
    transport.fail_with(ClientError::Forbidden("read-only key".into()));

    let err = client
        .log_clickthrough("e1", "books", "dune", "doc-42")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
}
