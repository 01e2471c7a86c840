/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::BearerToken;
use crate::model::responses::HttpRecord;
use reqwest::{Client, Method};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Thin HTTP client bound to the base URL of the service under test
///
/// Every call is a single request: no retries, no token refresh. The
/// underlying connection pool is released when the client is dropped.
pub struct HttpClient {
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    /// Builds a client from the REST settings
    ///
    /// # Arguments
    /// * `config` - Base URL and request timeout (0 means no timeout)
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to send requests
    /// * `Err(AppError)` - If the base URL is blank or the client cannot be built
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::InvalidInput("base URL is empty".to_string()));
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if config.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout));
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL
    ///
    /// Absolute `http://` and `https://` URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Makes a GET request, optionally authenticated
    pub async fn get(&self, path: &str, token: Option<&BearerToken>) -> Result<HttpRecord, AppError> {
        self.request(Method::GET, path, None::<&()>, token).await
    }

    /// Makes a POST request with a JSON body, optionally authenticated
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&BearerToken>,
    ) -> Result<HttpRecord, AppError> {
        self.request(Method::POST, path, Some(body), token).await
    }

    /// Makes a request and captures its status and body
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&BearerToken>,
    ) -> Result<HttpRecord, AppError> {
        let url = self.url_for(path);
        let auth_header_value;

        let mut headers = vec![("Accept", "application/json")];
        if let Some(token) = token {
            auth_header_value = token.header_value();
            headers.push(("Authorization", auth_header_value.as_str()));
        }

        make_http_request(&self.http_client, method, &url, headers, body).await
    }
}

/// Sends one HTTP request and returns its status and raw body
///
/// Non-success statuses are returned as records, not errors; the caller
/// decides what counts as success. Only transport failures are errors.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body, serialized as JSON with
///   `Content-Type: application/json`
///
/// # Example
///
/// ```ignore
/// let record = make_http_request(
///     &client,
///     Method::POST,
///     "http://localhost:8080/api/v1/auth/login",
///     vec![("Accept", "application/json")],
///     Some(&LoginRequest::new("test@example.com", "password123")),
/// ).await?;
/// println!("Status code: {}", record.status);
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&B>,
) -> Result<HttpRecord, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;
    Ok(HttpRecord::new(status.as_u16(), body))
}
