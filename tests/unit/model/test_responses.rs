use serde::Deserialize;
use transfer_smoke::error::AppError;
use transfer_smoke::model::responses::HttpRecord;

#[test]
fn test_http_record_success_set() {
    let created = HttpRecord::new(201, "{}");
    assert!(created.is_success_in(&[200, 201]));
    assert!(!created.is_success_in(&[200]));

    let unauthorized = HttpRecord::new(401, "");
    assert!(!unauthorized.is_success_in(&[200, 201]));
}

#[test]
fn test_http_record_json() {
    #[derive(Deserialize)]
    struct Transfers {
        items: Vec<u32>,
    }

    let record = HttpRecord::new(200, r#"{"items":[1,2,3]}"#);
    let transfers: Transfers = record.json().unwrap();
    assert_eq!(transfers.items, vec![1, 2, 3]);
}

#[test]
fn test_http_record_json_rejects_non_json() {
    let record = HttpRecord::new(200, "<html>oops</html>");
    let result: Result<serde_json::Value, AppError> = record.json();
    assert!(matches!(result, Err(AppError::Json(_))));
}
