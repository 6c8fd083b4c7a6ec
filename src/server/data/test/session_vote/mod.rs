use crate::server::{
    data::{session_vote::SessionVoteRepository, store::JsonStore},
    error::{vote::VoteError, AppError},
    model::{opaque_id::OpaqueId, session_vote::SessionVote, vote::VoteToggle},
};
use test_utils::{builder::TestBuilder, fixture};

mod create;
mod discard;
mod toggle_voter;

fn vote_id(id: &str) -> OpaqueId {
    OpaqueId::parse(id).unwrap()
}
