//! Tests for the HTTP client module

use super::*;
use crate::error::{Error, Result};
use crate::types::BackoffType;
use serde_json::{json, Value};
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, max_retries: u32) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(format!("{}/breweries", server.uri()))
        .max_retries(max_retries)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .rate_limit(None)
        .build();
    HttpClient::with_config(config).unwrap()
}

fn backoff_client(backoff_type: BackoffType) -> HttpClient {
    let config = HttpClientConfig::builder()
        .backoff(
            backoff_type,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .rate_limit(None)
        .build();
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.backoff_type, BackoffType::Exponential);
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("brewery-browser/"));
}

#[test]
fn test_request_config_keeps_query_order() {
    let request = RequestConfig::new()
        .query("query", "dog_fish")
        .query("per_page", "25");

    assert_eq!(
        request.query,
        vec![
            ("query".to_string(), "dog_fish".to_string()),
            ("per_page".to_string(), "25".to_string()),
        ]
    );
}

#[test_case(BackoffType::Constant, &[100, 100, 100] ; "constant")]
#[test_case(BackoffType::Linear, &[100, 200, 300, 400, 500, 500] ; "linear capped")]
#[test_case(BackoffType::Exponential, &[100, 200, 400, 500, 500] ; "exponential capped")]
fn test_calculate_backoff(backoff_type: BackoffType, expected_ms: &[u64]) {
    let client = backoff_client(backoff_type);
    for (attempt, expected) in expected_ms.iter().enumerate() {
        assert_eq!(
            client.calculate_backoff(attempt as u32),
            Duration::from_millis(*expected),
            "attempt {attempt}"
        );
    }
}

#[test]
fn test_calculate_backoff_huge_attempt_saturates() {
    let client = backoff_client(BackoffType::Exponential);
    assert_eq!(client.calculate_backoff(u32::MAX), Duration::from_millis(500));
}

// ============================================================================
// URLs
// ============================================================================

#[test_case("abc-123", "/v1/breweries/abc-123" ; "plain id")]
#[test_case("a/b?c#d", "/v1/breweries/a%2Fb%3Fc%23d" ; "reserved characters")]
#[test_case("two words", "/v1/breweries/two%20words" ; "space")]
fn test_segment_url_encodes_one_segment(segment: &str, expected_path: &str) {
    let config = HttpClientConfig::builder()
        .base_url("https://api.openbrewerydb.org/v1/breweries/")
        .rate_limit(None)
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = url::Url::parse(&client.segment_url(segment).unwrap()).unwrap();
    assert_eq!(url.path(), expected_path);
    assert!(url.query().is_none());
    assert!(url.fragment().is_none());
}

#[test]
fn test_segment_url_requires_base() {
    let config = HttpClientConfig::builder().rate_limit(None).build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(matches!(client.segment_url("x"), Err(Error::Config { .. })));
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_get_json_sends_query_and_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/search"))
        .and(query_param("query", "dog"))
        .and(query_param("per_page", "3"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "Dog Brewing"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/breweries", mock_server.uri()))
        .header("Accept", "application/json")
        .rate_limit(None)
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let data: Value = client
        .get_json(
            "search",
            &RequestConfig::new().query("query", "dog").query("per_page", "3"),
        )
        .await
        .unwrap();

    assert_eq!(data[0]["name"], "Dog Brewing");
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 0);
    let result: Result<Value> = client.get_json("random", &RequestConfig::new()).await;

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 3);
    let err = client
        .get_json::<Value>("missing", &RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, ref body } if body == "Not found"));
}

#[tokio::test]
async fn test_retry_on_500_then_succeed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 3);
    let data: Value = client
        .get_json("random", &RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(data, json!([]));
}

#[tokio::test]
async fn test_429_waits_for_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let result: Result<Value> = client.get_json("random", &RequestConfig::new()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_429_without_retries_is_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 0);
    let err = client
        .get_json::<Value>("random", &RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Unavailable"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 2);
    let err = client
        .get_json::<Value>("random", &RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_rate_limited_client_still_serves_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breweries/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/breweries", mock_server.uri()))
        .rate_limit(Some(RateLimiterConfig::new(100, 10)))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(format!("{client:?}").contains("has_rate_limiter: true"));

    for _ in 0..3 {
        let data: Value = client
            .get_json("random", &RequestConfig::new())
            .await
            .unwrap();
        assert_eq!(data, json!([]));
    }
}
