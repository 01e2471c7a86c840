/// Register and login calls
pub mod auth;
/// HTTP client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Scenario runner
pub mod runner;

pub use interfaces::auth::*;
pub use interfaces::transfers::*;
