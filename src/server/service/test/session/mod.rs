use crate::server::{
    data::store::JsonStore,
    error::{vote::VoteError, AppError},
    model::{opaque_id::OpaqueId, vote::VoteToggle},
    service::{embed::session_start_content, session::SessionService},
};
use test_utils::{builder::TestBuilder, fixture};

mod open_vote;
mod start_session;
mod toggle_vote;

/// Announcement that always goes out.
async fn announced(_voters: Vec<u64>) -> Result<(), AppError> {
    Ok(())
}
