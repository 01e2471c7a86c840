use assert_json_diff::assert_json_eq;
use serde_json::json;
use transfer_smoke::application::config::Credentials;
use transfer_smoke::model::requests::{LoginRequest, RegisterRequest};

#[test]
fn test_register_request_minimal_body() {
    let request = RegisterRequest::new("test1700000000@example.com", "password123", "Test", "User");
    let body = serde_json::to_value(&request).unwrap();

    assert_json_eq!(
        body,
        json!({
            "email": "test1700000000@example.com",
            "password": "password123",
            "firstName": "Test",
            "lastName": "User"
        })
    );
}

#[test]
fn test_register_request_full_profile_body() {
    let request = RegisterRequest::new("testuser@example.com", "securepassword123", "Test", "User")
        .with_phone_number("+1234567890")
        .with_date_of_birth("1990-01-01")
        .with_country("USA");
    let body = serde_json::to_value(&request).unwrap();

    assert_json_eq!(
        body,
        json!({
            "email": "testuser@example.com",
            "password": "securepassword123",
            "firstName": "Test",
            "lastName": "User",
            "phoneNumber": "+1234567890",
            "dateOfBirth": "1990-01-01",
            "country": "USA"
        })
    );
}

#[test]
fn test_register_request_passes_values_verbatim() {
    let request = RegisterRequest::new("  not-an-email ", "", "", "O'Brien");
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["email"], "  not-an-email ");
    assert_eq!(body["password"], "");
    assert_eq!(body["lastName"], "O'Brien");
}

#[test]
fn test_register_request_from_credentials() {
    let credentials = Credentials {
        country: Some("USA".to_string()),
        ..Credentials::default()
    };
    let request = RegisterRequest::from(&credentials);

    assert_eq!(request.email, "test@example.com");
    assert_eq!(request.password, "password123");
    assert_eq!(request.country.as_deref(), Some("USA"));
    assert!(request.phone_number.is_none());
}

#[test]
fn test_login_request_body() {
    let request = LoginRequest::new("test@example.com", "password123");
    let body = serde_json::to_value(&request).unwrap();

    assert_json_eq!(
        body,
        json!({"email": "test@example.com", "password": "password123"})
    );
}

#[test]
fn test_login_request_from_register_request() {
    let register = RegisterRequest::new("a@example.com", "pw", "A", "B").with_country("USA");
    let login = LoginRequest::from(&register);
    assert_eq!(login, LoginRequest::new("a@example.com", "pw"));
}

#[test]
fn test_register_request_to_json_matches_wire_body() {
    let request = RegisterRequest::new("test@example.com", "password123", "Test", "User");
    assert_eq!(
        request.to_json().unwrap(),
        r#"{"email":"test@example.com","password":"password123","firstName":"Test","lastName":"User"}"#
    );
}

#[test]
fn test_login_request_to_json_matches_wire_body() {
    let request = LoginRequest::new("test@example.com", "password123");
    assert_eq!(
        request.to_json().unwrap(),
        r#"{"email":"test@example.com","password":"password123"}"#
    );
}
