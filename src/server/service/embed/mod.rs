//! Card rendering for every message the bot posts.
//!
//! Rendering is a pure function of its inputs: the same state always yields the same
//! [`Card`]. Images come from configuration, everything else from the arguments.

mod request;
mod session;
mod staff;
mod status;
mod suggestion;

pub use session::{session_start_content, session_vote_content, session_vote_description};
pub use status::STATUS_FAILURE_NOTICE;

use crate::server::{config::Config, model::card::Card};

/// Community name used in message copy.
pub const COMMUNITY_NAME: &str = "New York Roleplay";

/// Renders cards using the configured banner images.
#[derive(Debug, Clone, Copy)]
pub struct CardRenderer<'a> {
    banner: Option<&'a str>,
    image: Option<&'a str>,
}

impl<'a> CardRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            banner: config.image_first.as_deref(),
            image: config.image_second.as_deref(),
        }
    }

    /// Renderer without images, for callers that only need the content.
    pub fn plain() -> Self {
        Self {
            banner: None,
            image: None,
        }
    }

    /// Empty card carrying both configured images.
    fn card(&self) -> Card {
        Card::new().banner(self.banner).image(self.image)
    }
}

/// Joins user mentions with spaces.
pub fn user_mentions(user_ids: &[u64]) -> String {
    user_ids
        .iter()
        .map(|id| format!("<@{id}>"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins role mentions with spaces.
pub fn role_mentions(role_ids: &[u64]) -> String {
    role_ids
        .iter()
        .map(|id| format!("<@&{id}>"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greeting posted when a member joins.
pub fn welcome_content(member_id: u64) -> String {
    format!(
        "👋 Welcome to ***{COMMUNITY_NAME}***, <@{member_id}>!\n\
         -# ***We're hiring Staff, open a ticket to apply!***"
    )
}
