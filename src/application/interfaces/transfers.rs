use crate::error::AppError;
use crate::model::auth::BearerToken;
use crate::model::responses::HttpRecord;
use async_trait::async_trait;

/// Interface for the transfers endpoints
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Lists transfers (`GET /transfers`)
    ///
    /// # Arguments
    /// * `token` - Bearer token; `None` sends the request without an
    ///   `Authorization` header
    async fn get_transfers(&self, token: Option<&BearerToken>) -> Result<HttpRecord, AppError>;
}
