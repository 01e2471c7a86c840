/// Authentication service interface
pub mod auth;
/// Transfers service interface
pub mod transfers;
