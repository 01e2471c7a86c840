/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Status code and raw body of one HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRecord {
    /// HTTP status code
    pub status: u16,
    /// Response body as received
    pub body: String,
}

impl HttpRecord {
    /// Creates a record
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Checks whether the status is one of `accepted`
    #[must_use]
    pub fn is_success_in(&self, accepted: &[u16]) -> bool {
        accepted.contains(&self.status)
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
