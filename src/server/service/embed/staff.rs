use super::{CardRenderer, COMMUNITY_NAME};
use crate::server::model::{
    card::Card,
    staff::{FeedbackParam, InfractionParam, PromotionParam, PunishmentParam},
};

impl CardRenderer<'_> {
    pub fn infraction(&self, param: &InfractionParam) -> Card {
        self.card()
            .title(param.kind.clone())
            .description(format!(
                "> On behalf of {COMMUNITY_NAME}, your recent actions did not meet our community \
                 standards. As a result, we have issued a {}.",
                param.kind
            ))
            .field("Reason", param.reason.clone(), true)
            .field(
                "Note",
                format!(
                    "*Please avoid causing drama. This is a procedural decision {}. For appeals \
                     or questions, open an IA ticket.*",
                    param.revokable
                ),
                false,
            )
    }

    pub fn promotion(&self, param: &PromotionParam) -> Card {
        self.card()
            .title(format!("Congrats {}!", param.username))
            .description(format!(
                "> You have been promoted to **{}** due to your dedication and performance.",
                param.rank_name
            ))
            .field("Reason", param.reason.clone(), false)
            .field("Note", "Keep up the great work and stay consistent!", false)
    }

    pub fn punishment(&self, param: &PunishmentParam) -> Card {
        self.card()
            .title("New punishment logged")
            .description(format!(
                "Punishment for <@{}> has been logged by <@{}>",
                param.user_id, param.moderator_id
            ))
            .field("Roblox user:", param.roblox_user.clone(), true)
            .field("Moderator", format!("<@{}>", param.moderator_id), true)
            .field("Reason", param.reason.clone(), false)
            .field("Proof", param.proof.clone(), false)
    }

    pub fn feedback(&self, param: &FeedbackParam) -> Card {
        self.card()
            .title("Feedback Submitted!")
            .description("Feedback submitted for a staff member!")
            .field("Staff Member", format!("<@{}>", param.staff_member_id), true)
            .field("Reviewed by", format!("<@{}>", param.reviewer_id), true)
            .field("Rating", param.rating.clone(), true)
            .field("Feedback", param.feedback.clone(), false)
    }

    pub fn partnership_requirements(&self) -> Card {
        self.card().title("Partnership Requirements").description(
            "## Partnership Requirements\n\n\
             ***Thank you for your interest in forming a partnership with us.***\n\n\
             - Minimum of 30 Members (Excluding Bots). If not, you need 2 reps.\n\
             - Active Community: Your server should demonstrate regular activity.\n\n\
             ***Reply with ✅ and your server advertisement if you meet these requirements.***",
        )
    }
}
