/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Transfer Smoke Prelude
//!
//! Imports the types needed to configure and run a smoke test.
//!
//! ```rust
//! use transfer_smoke::prelude::*;
//!
//! let config = Config::for_base_url("http://localhost:8080/api/v1");
//! let runner = SmokeRunner::new(config).unwrap();
//! assert_eq!(runner.credentials().email, "test@example.com");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Run configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SERVICES
// ============================================================================

/// Service interfaces
pub use crate::application::interfaces::auth::AuthService;
pub use crate::application::interfaces::transfers::TransferService;

/// HTTP implementation of the service interfaces
pub use crate::application::auth::Auth;
pub use crate::application::client::Client;

/// Scenario runner
pub use crate::application::runner::{Scenario, SmokeRunner, Step};

// ============================================================================
// MODELS
// ============================================================================

/// Wire models
pub use crate::model::auth::{AuthResponse, BearerToken};
pub use crate::model::http::HttpClient;
pub use crate::model::requests::{LoginRequest, RegisterRequest};
pub use crate::model::responses::HttpRecord;

// ============================================================================
// PRESENTATION
// ============================================================================

/// Reports
pub use crate::presentation::report::{SmokeOutcome, SmokeReport, StepReport};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Fresh registration emails
pub use crate::utils::id::unique_email;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};
