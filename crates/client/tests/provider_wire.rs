//! Wire-level tests for the reqwest transport against a mock provider.

use serde_json::json;
use serp_client::{SearchRequest, SearchService, SerpClient, SerpConfig, SerpError};
use serp_core::SearchCache;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SerpConfig {
    SerpConfig {
        api_token: Some("wire-token".into()),
        base_url: format!("{}/request", server.uri()),
        timeout: Duration::from_secs(1),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_request_wire_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/request"))
        .and(header("authorization", "Bearer wire-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "zone": "serp_api3",
            "url": "https://www.google.com/search?q=wifi%20review&num=3&hl=en",
            "format": "json"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organic": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = SerpClient::new(config_for(&server)).unwrap();
    let payload = client.fetch(&SearchRequest::new("wifi review").with_num_results(3)).await;

    assert_eq!(payload.unwrap(), json!({"organic": []}));
}

#[tokio::test]
async fn test_non_200_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let client = SerpClient::new(config_for(&server)).unwrap();
    let err = client.fetch(&SearchRequest::new("test")).await.unwrap_err();

    assert_eq!(err, SerpError::UpstreamStatus { status: 401, body: "invalid token".into() });
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = SerpClient::new(config_for(&server)).unwrap();
    let err = client.fetch(&SearchRequest::new("slow")).await.unwrap_err();

    assert_eq!(err, SerpError::Timeout { secs: 1 });
}

#[tokio::test]
async fn test_connection_refused_is_unexpected() {
    let config = SerpConfig {
        api_token: Some("t".into()),
        base_url: "http://127.0.0.1:9/request".into(),
        timeout: Duration::from_secs(5),
        ..Default::default()
    };

    let client = SerpClient::new(config).unwrap();
    let err = client.fetch(&SearchRequest::new("test")).await.unwrap_err();

    assert!(matches!(err, SerpError::Unexpected(_)), "got {err:?}");
}

#[tokio::test]
async fn test_service_end_to_end_with_envelope() {
    let server = MockServer::start().await;

    let inner = json!({
        "organic": [
            {"title": "Hotel A", "description": "Fast wifi in every room.", "link": "https://a.example"},
            {"title": "Hotel B", "snippet": "Guests praise the wifi.", "url": "https://b.example"},
            {"title": "Hotel C", "description": "Quiet stay.", "link": "https://c.example"},
            {"title": "Hotel D", "description": "Clean rooms.", "link": "https://d.example"},
            {"title": "Hotel E", "description": "Great service.", "link": "https://e.example"}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "body": inner.to_string()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SerpClient::new(config_for(&server)).unwrap();
    let service = SearchService::new(client, Arc::new(SearchCache::with_defaults()));
    let req = SearchRequest::new("wifi review").with_num_results(3);

    let first = service.search(&req).await;
    let second = service.search(&req).await;

    assert!(first.success);
    assert_eq!(first.results.len(), 3);
    assert_eq!(first.results[1].snippet, "Guests praise the wifi.");
    assert_eq!(first.results[1].link, "https://b.example");
    assert_eq!(first, second);
}
