//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server:
//! query-string construction, verbatim payload relay, and the collapse of
//! upstream failures into errors.

use integration_weather::{OpenWeatherClient, WeatherApiConfig, WeatherError};
use secrecy::SecretString;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Create a test client pointed at the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = WeatherApiConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..WeatherApiConfig::new(SecretString::from("test-key"))
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn current_weather_relays_payload_verbatim() {
    let mock_server = MockServer::start().await;

    let body = json!({"name": "Denver", "main": {"temp": 72.5}, "weather": [{"id": 800}]});
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("4463523").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert_eq!(result.unwrap(), body);
}

#[tokio::test]
async fn forecast_relays_payload_verbatim() {
    let mock_server = MockServer::start().await;

    let body = json!({"temp": 72});
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("id", "4463523"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("4463523", Some("imperial")).await;

    assert_eq!(result.unwrap(), body);
}

// ============================================================================
// Query-string construction
// ============================================================================

#[tokio::test]
async fn request_carries_id_key_and_default_units() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("id", "4463523"))
        .and(query_param("APPID", "test-key"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("4463523").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn forecast_units_override_the_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("42", Some("metric")).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn non_success_status_becomes_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("4463523").await;

    assert!(
        matches!(result, Err(WeatherError::UpstreamStatus(502))),
        "Expected UpstreamStatus, got: {result:?}"
    );
}

#[tokio::test]
async fn not_found_status_is_not_forwarded_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"cod": "404"})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("999999999").await;

    assert!(
        matches!(result, Err(WeatherError::UpstreamStatus(404))),
        "Expected UpstreamStatus, got: {result:?}"
    );
}

#[tokio::test]
async fn invalid_json_becomes_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("42", None).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn connection_refused_becomes_request_error() {
    // Port 1 is never listening
    let config = WeatherApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..WeatherApiConfig::new(SecretString::from("test-key"))
    };
    #[allow(clippy::expect_used)]
    let client = OpenWeatherClient::new(config).expect("Failed to create client");

    let result = client.current_weather("4463523").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}
