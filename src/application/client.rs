/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::transfers::TransferService;
use crate::constants::TRANSFERS_PATH;
use crate::error::AppError;
use crate::model::auth::BearerToken;
use crate::model::http::HttpClient;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::HttpRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the service under test
///
/// Implements every service interface over one shared HTTP connection pool.
pub struct Client {
    http_client: Arc<HttpClient>,
    auth: Auth,
}

impl Client {
    /// Creates a client from the configuration
    ///
    /// No request is sent until a service method is called.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(&config.rest_api)?);
        let auth = Auth::new(http_client.clone());
        Ok(Self { http_client, auth })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }
}

#[async_trait]
impl AuthService for Client {
    async fn register(&self, request: &RegisterRequest) -> Result<HttpRecord, AppError> {
        self.auth.register(request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<HttpRecord, AppError> {
        self.auth.login(request).await
    }
}

#[async_trait]
impl TransferService for Client {
    async fn get_transfers(&self, token: Option<&BearerToken>) -> Result<HttpRecord, AppError> {
        if token.is_some() {
            info!("Getting transfers");
        } else {
            info!("Getting transfers without credentials");
        }
        let record = self.http_client.get(TRANSFERS_PATH, token).await?;
        debug!("Transfers returned {}", record.status);
        Ok(record)
    }
}
