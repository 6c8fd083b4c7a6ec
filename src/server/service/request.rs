//! Staff request resolution.
//!
//! Requests are not persisted: everything needed to resolve one is carried by the posted
//! message itself (the buttons' interaction ids and the `User` field of its embed).

use crate::server::{
    model::{
        interaction::InteractionId,
        opaque_id::OpaqueId,
        request::{RequestDecision, RequestKind},
    },
    util::parse::parse_user_mention,
};

/// Name of the embed field holding the requester mention.
pub const REQUESTER_FIELD: &str = "User";

/// Label of the disabled button left on a resolved request.
pub const PROCESSED_LABEL: &str = "Processed";

/// Approve and deny decisions paired with the interaction ids of their buttons.
///
/// Both buttons carry the same freshly minted request id.
pub fn request_actions(kind: RequestKind) -> [(RequestDecision, InteractionId); 2] {
    let request_id = OpaqueId::mint();

    [RequestDecision::Approve, RequestDecision::Deny].map(|decision| {
        (
            decision,
            InteractionId::RequestAction {
                kind,
                request_id: request_id.clone(),
                decision,
            },
        )
    })
}

/// Recovers the requester from the fields of a request embed.
///
/// Looks for the field named `User` (case-insensitive) and reads the mention it holds.
///
/// # Returns
/// - `Some(u64)` - Requester id
/// - `None` - No such field, or its value is not a user mention
pub fn requester_from_fields<'f, I>(fields: I) -> Option<u64>
where
    I: IntoIterator<Item = (&'f str, &'f str)>,
{
    fields
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(REQUESTER_FIELD))
        .and_then(|(_, value)| parse_user_mention(value))
}

/// Footer stamped on a resolved request, e.g. "Approved by staff#0001".
pub fn decision_footer(decision: RequestDecision, actor_tag: &str) -> String {
    format!("{} by {actor_tag}", decision.title())
}

/// Direct message sent to the requester.
pub fn decision_notice(decision: RequestDecision, actor_tag: &str) -> String {
    format!(
        "Your request has been {} by {actor_tag}.",
        decision.past_tense()
    )
}

/// Acknowledgement shown to the staff member who resolved the request.
pub fn decision_ack(decision: RequestDecision) -> String {
    format!("Request {}.", decision.past_tense())
}
