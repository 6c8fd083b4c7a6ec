use super::CardRenderer;
use crate::server::model::{
    card::Card,
    request::{FiftyFiftyRequestParam, LoaRequestParam},
};

impl CardRenderer<'_> {
    /// 50/50 request posted for staff review.
    ///
    /// The `User` field is read back when the request is resolved.
    pub fn fifty_fifty_request(&self, param: &FiftyFiftyRequestParam) -> Card {
        self.card()
            .title(format!(
                "New 50/50 request has been submitted by <@{}>!",
                param.requester_id
            ))
            .field("User", format!("<@{}>", param.requester_id), true)
            .field("Time", param.submitted_at.to_rfc3339(), true)
            .field("Reason", param.reason.clone(), false)
    }

    /// Leave-of-absence request posted for staff review.
    pub fn loa_request(&self, param: &LoaRequestParam) -> Card {
        self.card()
            .title(format!("New LOA request by <@{}>", param.requester_id))
            .field("User", format!("<@{}>", param.requester_id), true)
            .field("Starts at", param.starts_at.clone(), true)
            .field("Ends at", param.ends_at.clone(), true)
            .field("Reason", param.reason.clone(), false)
    }
}
