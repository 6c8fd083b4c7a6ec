//! Persistence layer for the bot's mutable state.
//!
//! All state lives in one JSON document managed by [`store::JsonStore`]. Repositories wrap
//! the store with the lifecycle operations of each record type and perform every
//! read-modify-write through [`store::JsonStore::update`], which serialises concurrent
//! handlers so that no update is lost.

pub mod session_vote;
pub mod store;
pub mod suggestion;

#[cfg(test)]
mod test;
