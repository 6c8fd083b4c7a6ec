use super::{role_mentions, user_mentions, CardRenderer, COMMUNITY_NAME};
use crate::server::model::{card::Card, session_vote::SessionVote};

/// Description frozen into a session vote when it is opened.
pub fn session_vote_description(host_id: u64) -> String {
    format!(
        "## Session vote!\n <@{host_id}> has started a session vote! Vote up {COMMUNITY_NAME}!"
    )
}

/// Message content of a session vote announcement.
pub fn session_vote_content(ping_role_ids: &[u64]) -> String {
    role_mentions(ping_role_ids)
}

/// Message content of a session start announcement.
///
/// Lists the voters of the consumed vote after the role pings, or nothing when no one
/// voted or no vote existed.
pub fn session_start_content(ping_role_ids: &[u64], voters: &[u64]) -> String {
    let mut content = role_mentions(ping_role_ids);

    if !voters.is_empty() {
        if !content.is_empty() {
            content.push_str("\n\n");
        }
        content.push_str("**Voters:** ");
        content.push_str(&user_mentions(voters));
    }

    content
}

fn voters_field(voters: &[u64]) -> String {
    let mentions = if voters.is_empty() {
        "No voters yet".to_string()
    } else {
        user_mentions(voters)
    };

    format!("{mentions}\n**Total:** {}", voters.len())
}

impl CardRenderer<'_> {
    /// Session vote message, re-rendered after every toggle.
    pub fn session_vote(&self, vote: &SessionVote) -> Card {
        self.card()
            .description(vote.description.clone())
            .field("Voters", voters_field(&vote.voters), false)
    }

    pub fn session_started(&self) -> Card {
        self.card().title("Session Started!").description(format!(
            "## Session Started!\n\
             Get ready for realistic roleplay and an active community.\n\n\
             ━━━━━━━━━━━━━━━\n\
             🏷️ Server Name: {COMMUNITY_NAME}\n\
             ━━━━━━━━━━━━━━━\n\n\
             ⚠️ Reminder: Follow all server rules and respect staff at all times.\n\
             ✨ Let’s keep the experience fair, realistic, and fun for everyone!"
        ))
    }

    pub fn session_shutdown(&self) -> Card {
        self.card().title("Session shutdown").description(
            "## Session shutdown\n⚠️ The server has been shut down. Please wait for further updates.",
        )
    }
}
