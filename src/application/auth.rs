/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication calls against the service under test
//!
//! Registration and login are single POSTs with a JSON body. There is no
//! session cache: each call returns the raw exchange, and the bearer token is
//! read from it by the caller.

use crate::constants::{LOGIN_PATH, REGISTER_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::HttpRecord;
use std::sync::Arc;
use tracing::{debug, info};

/// Authentication client for the register and login endpoints
pub struct Auth {
    http_client: Arc<HttpClient>,
}

impl Auth {
    /// Creates an Auth instance sharing the given HTTP client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Registers a new account
    ///
    /// # Returns
    /// * `Ok(HttpRecord)` - Status and body, whether or not the status is a success
    /// * `Err(AppError)` - On transport failure or an unserializable body
    pub async fn register(&self, request: &RegisterRequest) -> Result<HttpRecord, AppError> {
        info!("Registering account {}", request.email);
        let payload = request.to_json()?;
        debug!(
            "Sending register request to: {}",
            self.http_client.url_for(REGISTER_PATH)
        );
        debug!("Sending JSON: {}", payload);
        let record = self.http_client.post(REGISTER_PATH, request, None).await?;
        debug!("Register returned {}", record.status);
        Ok(record)
    }

    /// Signs in with email and password
    ///
    /// # Returns
    /// * `Ok(HttpRecord)` - Status and body, whether or not the status is a success
    /// * `Err(AppError)` - On transport failure or an unserializable body
    pub async fn login(&self, request: &LoginRequest) -> Result<HttpRecord, AppError> {
        info!("Logging in as {}", request.email);
        let payload = request.to_json()?;
        debug!(
            "Sending login request to: {}",
            self.http_client.url_for(LOGIN_PATH)
        );
        debug!("Sending JSON: {}", payload);
        let record = self.http_client.post(LOGIN_PATH, request, None).await?;
        debug!("Login returned {}", record.status);
        Ok(record)
    }
}
