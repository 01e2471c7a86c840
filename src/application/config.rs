/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_DATE_OF_BIRTH, DEFAULT_EMAIL, DEFAULT_FIRST_NAME,
    DEFAULT_LAST_NAME, DEFAULT_PASSWORD, DEFAULT_PHONE_NUMBER, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Account credentials and profile fields sent to the auth endpoints
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Given name used on registration
    pub first_name: String,
    /// Family name used on registration
    pub last_name: String,
    /// Optional phone number used on registration
    pub phone_number: Option<String>,
    /// Optional date of birth (`YYYY-MM-DD`) used on registration
    pub date_of_birth: Option<String>,
    /// Optional country used on registration
    pub country: Option<String>,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            phone_number: None,
            date_of_birth: None,
            country: None,
        }
    }
}

impl Credentials {
    /// Fills any missing profile field with the sample signup values
    #[must_use]
    pub fn with_full_profile(mut self) -> Self {
        self.phone_number
            .get_or_insert_with(|| DEFAULT_PHONE_NUMBER.to_string());
        self.date_of_birth
            .get_or_insert_with(|| DEFAULT_DATE_OF_BIRTH.to_string());
        self.country.get_or_insert_with(|| DEFAULT_COUNTRY.to_string());
        self
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API of the service under test
pub struct RestApiConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8080/api/v1`
    pub base_url: String,
    /// Request timeout in seconds, 0 disables it
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for a smoke-test run
pub struct Config {
    /// Credentials and profile fields
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Replace the registration email with a fresh `test<unix-seconds>@example.com`
    pub unique_email: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from `.env` and the environment
    ///
    /// Unset variables fall back to the local development defaults
    /// (`http://localhost:8080/api/v1`, `test@example.com` / `password123`).
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("SMOKE_BASE_URL", String::from(DEFAULT_BASE_URL));
        if base_url.trim().is_empty() {
            warn!("SMOKE_BASE_URL is blank, requests will fail");
        }

        Config {
            credentials: Credentials {
                email: get_env_or_default("SMOKE_EMAIL", String::from(DEFAULT_EMAIL)),
                password: get_env_or_default("SMOKE_PASSWORD", String::from(DEFAULT_PASSWORD)),
                first_name: get_env_or_default(
                    "SMOKE_FIRST_NAME",
                    String::from(DEFAULT_FIRST_NAME),
                ),
                last_name: get_env_or_default("SMOKE_LAST_NAME", String::from(DEFAULT_LAST_NAME)),
                phone_number: get_env_or_none("SMOKE_PHONE_NUMBER"),
                date_of_birth: get_env_or_none("SMOKE_DATE_OF_BIRTH"),
                country: get_env_or_none("SMOKE_COUNTRY"),
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("SMOKE_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            unique_email: get_env_flag("SMOKE_UNIQUE_EMAIL", false),
        }
    }

    /// Builds a configuration pointing at `base_url` with default credentials,
    /// without reading the environment
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            unique_email: false,
        }
    }
}
