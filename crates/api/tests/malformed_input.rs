//! Malformed path, query and body input must come back as JSON 400s.
//!
//! Every request here is rejected by an extractor before the handler runs,
//! so the router is built over a pool that never connects.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

/// Assert a JSON `BAD_REQUEST` error body and return its message.
async fn expect_bad_request(response: Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("error responses carry a content type")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(content_type, "application/json");

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    json["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn non_numeric_path_id_returns_json_400() {
    let response = get(build_offline_app(), "/api/film/abc").await;
    let message = expect_bad_request(response).await;
    assert!(message.contains("abc"), "unexpected message: {message}");
}

#[tokio::test]
async fn non_numeric_rental_id_on_return_returns_json_400() {
    let response = put_empty(build_offline_app(), "/api/rentals/latest/return").await;
    expect_bad_request(response).await;
}

#[tokio::test]
async fn non_numeric_limit_returns_json_400() {
    let response = get(build_offline_app(), "/api/top-actors?limit=ten").await;
    expect_bad_request(response).await;
}

#[tokio::test]
async fn non_numeric_page_returns_json_400() {
    let response = get(build_offline_app(), "/api/customers?page=first").await;
    expect_bad_request(response).await;
}

#[tokio::test]
async fn mistyped_body_field_returns_json_400() {
    let body = json!({ "inventory_id": "x", "customer_id": 1 });
    let response = post_json(build_offline_app(), "/api/rentals", body).await;
    expect_bad_request(response).await;
}

#[tokio::test]
async fn unparseable_body_returns_json_400() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/customers/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"first_name\": "))
        .unwrap();
    let response = build_offline_app().oneshot(request).await.unwrap();
    expect_bad_request(response).await;
}

#[tokio::test]
async fn body_without_content_type_returns_json_400() {
    let response = send(build_offline_app(), Method::POST, "/api/customers", None).await;
    expect_bad_request(response).await;
}
