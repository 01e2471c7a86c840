use transfer_smoke::error::AppError;
use transfer_smoke::model::auth::{AuthResponse, BearerToken};
use transfer_smoke::model::responses::HttpRecord;

#[test]
fn test_bearer_token_from_record() {
    let record = HttpRecord::new(201, r#"{"token":"eyJhbGciOi.abc.def","user":{"id":7}}"#);
    let token = BearerToken::from_record(&record).unwrap();

    assert_eq!(token.as_str(), "eyJhbGciOi.abc.def");
    assert_eq!(token.header_value(), "Bearer eyJhbGciOi.abc.def");
    assert_eq!(token.to_string(), "eyJhbGciOi.abc.def");
}

#[test]
fn test_bearer_token_missing_field() {
    let record = HttpRecord::new(200, r#"{"message":"ok"}"#);
    let result = BearerToken::from_record(&record);
    assert!(matches!(result, Err(AppError::MissingToken)));
}

#[test]
fn test_bearer_token_null_or_empty() {
    for body in [r#"{"token":null}"#, r#"{"token":""}"#, r#"{"token":"   "}"#] {
        let record = HttpRecord::new(200, body);
        assert!(
            matches!(BearerToken::from_record(&record), Err(AppError::MissingToken)),
            "body {body} should not yield a token"
        );
    }
}

#[test]
fn test_bearer_token_non_json_body() {
    let record = HttpRecord::new(200, "Created");
    assert!(matches!(
        BearerToken::from_record(&record),
        Err(AppError::Json(_))
    ));
}

#[test]
fn test_bearer_token_debug_hides_value() {
    let token = BearerToken::new("secret").unwrap();
    assert_eq!(format!("{token:?}"), "BearerToken(***)");
}

#[test]
fn test_auth_response_defaults_token() {
    let response: AuthResponse = serde_json::from_str("{}").unwrap();
    assert!(response.token.is_none());
}
