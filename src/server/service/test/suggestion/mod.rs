use crate::server::{
    data::store::JsonStore,
    error::AppError,
    model::{suggestion::VoteDirection, vote::VoteToggle},
    service::suggestion::{vote_ack, SuggestionService},
};
use test_utils::builder::TestBuilder;

mod submit;
mod vote;
