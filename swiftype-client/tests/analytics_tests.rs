mod common;

use chrono::NaiveDate;
use common::recording_client;
use pretty_assertions::assert_eq;
use serde_json::json;
use swiftype_client::Method;
use swiftype_client::types::{DateRange, Pagination};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn searches_without_range_sends_no_dates() {
    let (client, transport) = recording_client();
    client
        .analytics_searches("e1", DateRange::default())
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, Method::Get);
    assert_eq!(call.path, "engines/e1/analytics/searches.json");
    assert_eq!(call.params, json!({}));
}

#[tokio::test]
async fn searches_with_full_range() {
    let (client, transport) = recording_client();
    client
        .analytics_searches("e1", DateRange::between(date(2024, 3, 1), date(2024, 3, 7)))
        .await
        .unwrap();

    assert_eq!(
        transport.only_call().params,
        json!({ "start_date": "2024-03-01", "end_date": "2024-03-07" })
    );
}

#[tokio::test]
async fn autoselects_with_start_only() {
    let (client, transport) = recording_client();
    client
        .analytics_autoselects("e1", DateRange::since(date(2024, 3, 1)))
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.path, "engines/e1/analytics/autoselects.json");
    assert_eq!(call.params, json!({ "start_date": "2024-03-01" }));
}

#[tokio::test]
async fn top_queries_uses_pagination() {
    let (client, transport) = recording_client();
    client
        .analytics_top_queries("e1", Pagination::page(2))
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.path, "engines/e1/analytics/top_queries.json");
    assert_eq!(call.params, json!({ "page": 2 }));
}

#[tokio::test]
async fn top_queries_in_range_with_end_only() {
    let (client, transport) = recording_client();
    client
        .analytics_top_queries_in_range("e1", DateRange::until(date(2024, 12, 31)))
        .await
        .unwrap();

    let call = transport.only_call();
    assert_eq!(call.path, "engines/e1/analytics/top_queries_in_range.json");
    assert_eq!(call.params, json!({ "end_date": "2024-12-31" }));
}

#[tokio::test]
async fn top_no_result_queries_hits_in_range_report() {
    let (client, transport) = recording_client();
    client
        .analytics_top_no_result_queries("e1", DateRange::default())
        .await
        .unwrap();

    assert_eq!(
        transport.only_call().path,
        "engines/e1/analytics/top_no_result_queries_in_range.json"
    );
}
