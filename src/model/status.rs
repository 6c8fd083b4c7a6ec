use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Live game-server status.
///
/// Field names are camelCase to match what dashboards and the `!sessions` command read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusDto {
    pub server_name: String,
    pub players_online: u32,
    pub staff_online: u32,
    pub server_code: String,
    /// Unix time in milliseconds.
    pub last_updated: i64,
    pub queue_count: u32,
    pub quick_join: String,
}
