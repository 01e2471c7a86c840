/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::HttpRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON body returned by the register and login endpoints
///
/// Only `token` is read; any other fields the service sends are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthResponse {
    /// Session token, absent on some error payloads
    #[serde(default)]
    pub token: Option<String>,
}

/// Opaque session token presented as `Authorization: Bearer <token>`
///
/// Lives for a single run. There is no refresh and no expiry tracking.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw token, rejecting empty strings
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AppError::MissingToken);
        }
        Ok(Self(raw))
    }

    /// Reads the `token` field out of a successful auth response
    pub fn from_record(record: &HttpRecord) -> Result<Self, AppError> {
        let response: AuthResponse = record.json()?;
        match response.token {
            Some(token) => Self::new(token),
            None => Err(AppError::MissingToken),
        }
    }

    /// Raw token string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}
