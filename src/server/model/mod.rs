//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! the persisted bot state (session votes and suggestion tallies), the interaction id
//! wire format carried by message buttons, and the parameter types of the slash commands.
//! Persisted models derive serde with the camelCase key layout of the store document.

pub mod card;
pub mod interaction;
pub mod opaque_id;
pub mod permission;
pub mod request;
pub mod session_vote;
pub mod staff;
pub mod status;
pub mod store;
pub mod suggestion;
pub mod vote;
