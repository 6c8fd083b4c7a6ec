//! HTTP request handlers of the status API.

pub mod status;
