use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::HttpRecord;
use async_trait::async_trait;

/// Interface for the authentication endpoints
///
/// Implementations return the raw exchange whatever the status; deciding
/// whether the call succeeded is left to the caller.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account (`POST /auth/register`)
    async fn register(&self, request: &RegisterRequest) -> Result<HttpRecord, AppError>;

    /// Signs in to an existing account (`POST /auth/login`)
    async fn login(&self, request: &LoginRequest) -> Result<HttpRecord, AppError>;
}
