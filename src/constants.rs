/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Base URL of the service under test, including the API prefix
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
/// Account creation endpoint, relative to the base URL
pub const REGISTER_PATH: &str = "auth/register";
/// Sign-in endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "auth/login";
/// Authenticated transfers listing endpoint, relative to the base URL
pub const TRANSFERS_PATH: &str = "transfers";
/// Status codes accepted as a successful registration
pub const REGISTER_SUCCESS: &[u16] = &[200, 201];
/// Status codes accepted as a successful login
pub const LOGIN_SUCCESS: &[u16] = &[200];
/// Status codes accepted as a successful transfers listing
pub const TRANSFERS_SUCCESS: &[u16] = &[200];
/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
/// Default account email
pub const DEFAULT_EMAIL: &str = "test@example.com";
/// Default account password
pub const DEFAULT_PASSWORD: &str = "password123";
/// Default first name sent on registration
pub const DEFAULT_FIRST_NAME: &str = "Test";
/// Default last name sent on registration
pub const DEFAULT_LAST_NAME: &str = "User";
/// Sample phone number for full-profile signups
pub const DEFAULT_PHONE_NUMBER: &str = "+1234567890";
/// Sample date of birth for full-profile signups
pub const DEFAULT_DATE_OF_BIRTH: &str = "1990-01-01";
/// Sample country for full-profile signups
pub const DEFAULT_COUNTRY: &str = "USA";
/// Local part prefix used when generating a fresh email
pub const UNIQUE_EMAIL_PREFIX: &str = "test";
/// Domain used when generating a fresh email
pub const UNIQUE_EMAIL_DOMAIN: &str = "example.com";
/// User agent string sent with every request
pub const USER_AGENT: &str = "transfer-smoke/0.1.0";
