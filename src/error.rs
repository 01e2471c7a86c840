/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::fmt;

/// Errors raised while running a smoke test
///
/// A non-success HTTP status on an auth call is not an error: it is reported
/// as a failed step. These variants cover the faults that abort a run.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connection refused, DNS, TLS, timeout)
    Network(reqwest::Error),
    /// Response body could not be decoded as JSON
    Json(serde_json::Error),
    /// Writing the report failed
    Io(std::io::Error),
    /// Successful auth response without a usable `token` field
    MissingToken,
    /// Invalid configuration or argument
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::MissingToken => write!(f, "token missing from response"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
