//! Wire DTOs returned by the HTTP API.

pub mod api;
pub mod status;
