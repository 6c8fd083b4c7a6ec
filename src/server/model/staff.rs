//! Parameters of the staff logging commands.

/// Parameters for logging an infraction against a member.
#[derive(Debug, Clone)]
pub struct InfractionParam {
    pub target_id: u64,
    pub reason: String,
    /// Infraction type shown as the embed title, e.g. "Warning".
    pub kind: String,
    /// Free text appended to the procedural note, e.g. "and is revokable".
    pub revokable: String,
}

/// Parameters for announcing a promotion.
#[derive(Debug, Clone)]
pub struct PromotionParam {
    pub user_id: u64,
    pub username: String,
    pub rank_name: String,
    pub reason: String,
}

/// Parameters for logging a punishment.
#[derive(Debug, Clone)]
pub struct PunishmentParam {
    pub moderator_id: u64,
    pub user_id: u64,
    pub roblox_user: String,
    pub reason: String,
    pub proof: String,
}

/// Parameters for submitting staff feedback.
#[derive(Debug, Clone)]
pub struct FeedbackParam {
    pub reviewer_id: u64,
    pub staff_member_id: u64,
    pub rating: String,
    pub feedback: String,
}
