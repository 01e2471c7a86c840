use mockito::{Matcher, Server};
use reqwest::{Client, Method};
use serde_json::json;
use transfer_smoke::application::config::RestApiConfig;
use transfer_smoke::error::AppError;
use transfer_smoke::model::auth::BearerToken;
use transfer_smoke::model::http::{HttpClient, make_http_request};
use transfer_smoke::model::requests::LoginRequest;

fn rest_config(base_url: &str) -> RestApiConfig {
    RestApiConfig {
        base_url: base_url.to_string(),
        timeout: 5,
    }
}

#[test]
fn test_url_for_joins_paths() {
    let client = HttpClient::new(&rest_config("http://localhost:8080/api/v1/")).unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
    assert_eq!(
        client.url_for("auth/login"),
        "http://localhost:8080/api/v1/auth/login"
    );
    assert_eq!(
        client.url_for("/transfers"),
        "http://localhost:8080/api/v1/transfers"
    );
    assert_eq!(
        client.url_for("http://other:9090/health"),
        "http://other:9090/health"
    );
    assert_eq!(
        client.url_for("https://secure:8443/health"),
        "https://secure:8443/health"
    );
}

#[test]
fn test_url_for_keeps_http_prefixed_relative_paths() {
    let client = HttpClient::new(&rest_config("http://localhost:8080/api/v1")).unwrap();

    assert_eq!(
        client.url_for("httpbin/status"),
        "http://localhost:8080/api/v1/httpbin/status"
    );
    assert_eq!(
        client.url_for("https-status"),
        "http://localhost:8080/api/v1/https-status"
    );
}

#[test]
fn test_blank_base_url_is_rejected() {
    let result = HttpClient::new(&rest_config("   "));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/auth/login")
        .match_header("content-type", "application/json")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(
            json!({"email": "test@example.com", "password": "password123"}),
        ))
        .with_status(200)
        .with_body(r#"{"token":"abc"}"#)
        .create_async()
        .await;

    let client = HttpClient::new(&rest_config(&format!("{}/api/v1", server.url()))).unwrap();
    let record = client
        .post(
            "auth/login",
            &LoginRequest::new("test@example.com", "password123"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(record.status, 200);
    assert_eq!(record.body, r#"{"token":"abc"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_sends_bearer_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/transfers")
        .match_header("authorization", "Bearer abc")
        .match_header("user-agent", transfer_smoke::constants::USER_AGENT)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = HttpClient::new(&rest_config(&format!("{}/api/v1", server.url()))).unwrap();
    let token = BearerToken::new("abc").unwrap();
    let record = client.get("transfers", Some(&token)).await.unwrap();

    assert_eq!(record.status, 200);
    assert_eq!(record.body, "[]");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_make_http_request_returns_error_statuses_as_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let url = format!("{}/missing", server.url());
    let record = make_http_request(&Client::new(), Method::GET, &url, vec![], None::<&()>)
        .await
        .unwrap();

    assert_eq!(record.status, 404);
    assert_eq!(record.body, "not here");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_make_http_request_connection_refused() {
    let result = make_http_request(
        &Client::new(),
        Method::GET,
        "http://127.0.0.1:1/api/v1/transfers",
        vec![],
        None::<&()>,
    )
    .await;

    assert!(matches!(result, Err(AppError::Network(_))));
}
