/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Transfer Smoke
//!
//! Authenticated HTTP smoke tests for the transfers service API.
//!
//! Every scenario runs the same short sequence against a running service:
//!
//! 1. create an account or sign in (`POST /auth/register`, `POST /auth/login`)
//! 2. read the bearer token from the JSON response
//! 3. call an authenticated endpoint (`GET /transfers`) with that token
//! 4. print the status code and raw body of every call
//!
//! A non-success status on the first call stops the run with a failure message.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use transfer_smoke::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let config = Config::new();
//! let runner = SmokeRunner::new(config)?;
//! let mut stdout = std::io::stdout();
//! let report = runner.run(Scenario::RegisterTransfers, &mut stdout).await?;
//! assert!(report.passed());
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, services and the smoke-test runner
pub mod application;

/// Default values and endpoint paths
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// Wire models and HTTP transport
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Report rendering for console output
pub mod presentation;

/// Environment, logging and identifier helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
