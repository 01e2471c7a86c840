use chrono::DateTime;
use transfer_smoke::utils::id::{email_for_instant, unique_email};

#[test]
fn test_email_for_instant() {
    let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    assert_eq!(
        email_for_instant("test", "example.com", at),
        "test1700000000@example.com"
    );
}

#[test]
fn test_unique_email_shape() {
    let email = unique_email();
    let local = email
        .strip_prefix("test")
        .and_then(|rest| rest.strip_suffix("@example.com"))
        .expect("email should be test<digits>@example.com");
    assert!(!local.is_empty());
    assert!(local.chars().all(|c| c.is_ascii_digit()));
}
