// Common utilities for integration tests

use transfer_smoke::prelude::*;

/// Creates a client from the environment (`.env`, `SMOKE_*`)
pub fn create_test_client() -> (Config, Client) {
    setup_logger();
    let config = Config::new();
    let client = Client::new(&config).expect("Failed to create client");
    (config, client)
}

/// Registers a never-used account and returns its request and token
pub async fn register_fresh_account(client: &Client) -> (RegisterRequest, BearerToken) {
    let request = RegisterRequest::new(unique_email(), "password123", "Test", "User");
    let record = client
        .register(&request)
        .await
        .expect("register request should reach the service");
    assert!(
        record.is_success_in(REGISTER_SUCCESS),
        "register returned {}: {}",
        record.status,
        record.body
    );
    let token = BearerToken::from_record(&record).expect("register should return a token");
    (request, token)
}
