mod test_utils;

use hospico_client::api::{ApiClient, ApiError};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{client_for, test_config};

#[rstest]
#[case(StatusCode::BAD_REQUEST, "Cannot book in the past", "Cannot book in the past")]
#[case(StatusCode::BAD_REQUEST, "", "Bad Request - Please check your input")]
#[case(StatusCode::UNAUTHORIZED, "", "Unauthorized - Please check your credentials")]
#[case(StatusCode::FORBIDDEN, "nope", "Forbidden - Access denied")]
#[case(StatusCode::NOT_FOUND, "", "Not Found - Resource not found")]
#[case(
    StatusCode::INTERNAL_SERVER_ERROR,
    "stack trace",
    "Internal Server Error - Please try again later"
)]
#[case(StatusCode::BAD_GATEWAY, r#"{"message":"upstream down"}"#, "upstream down")]
#[case(StatusCode::SERVICE_UNAVAILABLE, "", "Server Error")]
fn test_status_messages(#[case] status: StatusCode, #[case] body: &str, #[case] expected: &str) {
    assert_eq!(ApiError::from_status(status, body).to_string(), expected);
}

#[test]
fn test_unlisted_status_keeps_code() {
    match ApiError::from_status(StatusCode::CONFLICT, "taken") {
        ApiError::Status { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "taken");
        }
        other => panic!("Expected Status error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .and(header("Authorization", "Bearer test-jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "UP" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body: Value = client_for(&mock_server).get_json("/api/health").await.unwrap();

    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn test_anonymous_client_sends_no_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "UP" })))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.api_token = None;
    let client = ApiClient::new(config).unwrap();

    let _: Value = client.get_json("/api/health").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[test]
fn test_invalid_token_is_rejected_at_startup() {
    let mut config = test_config("http://localhost");
    config.api_token = Some("bad\ntoken".to_string());

    assert!(ApiClient::new(config).is_err());
}
