//! Game-server status models, upstream payloads and the domain snapshot.

use serde::Deserialize;

use crate::model::status::ServerStatusDto;

/// Upstream permission levels counted as staff.
pub const STAFF_PERMISSIONS: [&str; 3] = ["Administrator", "Owner", "Moderator"];

/// `GET /server` payload of the upstream game-server API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamServer {
    pub name: String,
    pub join_code: String,
}

/// Entry of the `GET /server/players` payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamPlayer {
    #[serde(default)]
    pub permission: String,
}

impl UpstreamPlayer {
    pub fn is_staff(&self) -> bool {
        STAFF_PERMISSIONS.contains(&self.permission.as_str())
    }
}

/// Snapshot of the game server served by the status API.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerStatus {
    pub server_name: String,
    pub players_online: u32,
    pub staff_online: u32,
    pub server_code: String,
    /// Unix time in milliseconds when the snapshot was taken.
    pub last_updated: i64,
    pub queue_count: u32,
    pub quick_join: String,
}

/// Static snapshot served when no upstream is configured or the upstream fails.
pub const FALLBACK_SERVER_NAME: &str = "New York Roleplay";
pub const FALLBACK_SERVER_CODE: &str = "nyrp";
pub const FALLBACK_QUICK_JOIN: &str = "https://join.nyrp.com";

/// Private-server link prefix completed with the upstream join code.
pub const QUICK_JOIN_PREFIX: &str =
    "https://www.roblox.com/games/2534724415/?privateserverlinkcode=";

impl ServerStatus {
    /// Static snapshot stamped with `last_updated`.
    pub fn fallback(last_updated: i64) -> Self {
        Self {
            server_name: FALLBACK_SERVER_NAME.to_string(),
            players_online: 1,
            staff_online: 1,
            server_code: FALLBACK_SERVER_CODE.to_string(),
            last_updated,
            queue_count: 0,
            quick_join: FALLBACK_QUICK_JOIN.to_string(),
        }
    }

    /// Builds a snapshot from the three upstream payloads.
    ///
    /// `queue` is counted only when it is a JSON array.
    pub fn from_upstream(
        server: UpstreamServer,
        players: &[UpstreamPlayer],
        queue: &serde_json::Value,
        last_updated: i64,
    ) -> Self {
        let staff_online = players.iter().filter(|player| player.is_staff()).count();
        let queue_count = queue.as_array().map_or(0, Vec::len);

        Self {
            quick_join: format!("{QUICK_JOIN_PREFIX}{}", server.join_code),
            server_name: server.name,
            players_online: players.len() as u32,
            staff_online: staff_online as u32,
            server_code: server.join_code,
            last_updated,
            queue_count: queue_count as u32,
        }
    }

    /// Converts the snapshot into the API response body.
    pub fn into_dto(self) -> ServerStatusDto {
        ServerStatusDto {
            server_name: self.server_name,
            players_online: self.players_online,
            staff_online: self.staff_online,
            server_code: self.server_code,
            last_updated: self.last_updated,
            queue_count: self.queue_count,
            quick_join: self.quick_join,
        }
    }
}
