/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{UNIQUE_EMAIL_DOMAIN, UNIQUE_EMAIL_PREFIX};
use chrono::{DateTime, Utc};

/// Builds `<prefix><unix-seconds>@<domain>` for the given instant
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use transfer_smoke::utils::id::email_for_instant;
///
/// let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
/// assert_eq!(email_for_instant("test", "example.com", at), "test1700000000@example.com");
/// ```
pub fn email_for_instant(prefix: &str, domain: &str, at: DateTime<Utc>) -> String {
    format!("{prefix}{}@{domain}", at.timestamp())
}

/// Generates a registration email that has not been used before, assuming
/// at most one registration per second
pub fn unique_email() -> String {
    email_for_instant(UNIQUE_EMAIL_PREFIX, UNIQUE_EMAIL_DOMAIN, Utc::now())
}
