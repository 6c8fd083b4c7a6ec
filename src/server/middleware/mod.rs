//! Guards consulted before privileged work runs.
//!
//! - `auth` - Role-backed capability gate for bot commands and buttons
//! - `api_key` - Static credential check for the HTTP status API

pub mod api_key;
pub mod auth;
