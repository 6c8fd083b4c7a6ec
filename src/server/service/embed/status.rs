use super::CardRenderer;
use crate::{model::status::ServerStatusDto, server::model::card::Card};

/// Posted in place of the live-session summary when the status API cannot be read.
pub const STATUS_FAILURE_NOTICE: &str = "❌ Failed fetching NYRP API data.";

/// Player cap shown next to the online count.
const MAX_PLAYERS: u32 = 40;

impl CardRenderer<'_> {
    /// Live-session summary posted by `!sessions`.
    pub fn live_session(&self, status: &ServerStatusDto) -> Card {
        self.card()
            .title(format!("{} - Live Session", status.server_name))
            .description(format!(
                "Stay informed with live updates from our ongoing roleplay session.\n\n\
                 **Players Online:** {}/{MAX_PLAYERS}\n\
                 **Staff Online:** {}\n\
                 **Server Code:** {}\n\
                 **Last Updated:** <t:{}:R>\n\
                 **Queue Count:** {}\n\
                 **Quick Join:** [Click Here]({})",
                status.players_online,
                status.staff_online,
                status.server_code,
                status.last_updated / 1000,
                status.queue_count,
                status.quick_join,
            ))
    }
}
