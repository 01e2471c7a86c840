/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Authentication models: token extraction and bearer header
pub mod auth;
/// HTTP transport for single, non-retried requests
pub mod http;
/// Request bodies for the auth endpoints
pub mod requests;
/// Response record shared by every call
pub mod responses;
