//! Staff request models for 50/50 and leave-of-absence requests.

use chrono::{DateTime, Utc};

/// Kind of staff request, which decides the interaction prefix and target channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    FiftyFifty,
    LeaveOfAbsence,
}

impl RequestKind {
    /// Interaction id prefix of the approve/deny buttons.
    pub fn interaction_prefix(&self) -> &'static str {
        match self {
            Self::FiftyFifty => "fifty_action",
            Self::LeaveOfAbsence => "loa_action",
        }
    }

    pub fn from_interaction_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "fifty_action" => Some(Self::FiftyFifty),
            "loa_action" => Some(Self::LeaveOfAbsence),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FiftyFifty => "50/50",
            Self::LeaveOfAbsence => "LOA",
        }
    }
}

/// Decision taken on a staff request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    Approve,
    Deny,
}

impl RequestDecision {
    /// Wire form used as the action segment of interaction ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Deny => "deny",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(Self::Approve),
            "deny" => Some(Self::Deny),
            _ => None,
        }
    }

    /// Button label, e.g. "Approve".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Deny => "Deny",
        }
    }

    /// Lowercase past tense, e.g. "approved".
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Deny => "denied",
        }
    }

    /// Capitalised past tense used in embed footers, e.g. "Approved".
    pub fn title(&self) -> &'static str {
        match self {
            Self::Approve => "Approved",
            Self::Deny => "Denied",
        }
    }
}

/// Parameters for filing a 50/50 request.
#[derive(Debug, Clone)]
pub struct FiftyFiftyRequestParam {
    /// Discord ID of the staff member filing the request.
    pub requester_id: u64,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

/// Parameters for filing a leave-of-absence request.
#[derive(Debug, Clone)]
pub struct LoaRequestParam {
    /// Discord ID of the staff member filing the request.
    pub requester_id: u64,
    pub starts_at: String,
    pub ends_at: String,
    pub reason: String,
}
