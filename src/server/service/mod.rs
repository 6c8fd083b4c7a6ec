//! Service layer for business logic and orchestration.
//!
//! This module sits between the bot/controller layers and the data (repository) layer.
//! Services never talk to Discord themselves; they are responsible for:
//!
//! - **Business Logic**: Session vote lifecycle, suggestion voting, request resolution
//! - **Rendering**: Turning store state into [`Card`](crate::server::model::card::Card) payloads
//! - **Orchestration**: Coordinating repository calls and the upstream status API

pub mod embed;
pub mod request;
pub mod session;
pub mod status;
pub mod suggestion;

#[cfg(test)]
mod test;
