//! Role-backed capabilities consulted before privileged actions.

use std::fmt;

/// Capability an actor must hold, each backed by one configured guild role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// May open session votes, start and shut down sessions.
    SessionHost,
    /// May file 50/50 and LOA requests and resolve them.
    Staff,
    /// May log infractions, promotions and punishments.
    Management,
    /// May use the `!say` prefix command.
    Echo,
}

impl Capability {
    /// Name of the environment variable holding the backing role id.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::SessionHost => "SESSION_HOST_ROLE_ID",
            Self::Staff => "STAFF_ROLE_ID",
            Self::Management => "MANAGEMENT_ROLE_ID",
            Self::Echo => "ECHO_ROLE_ID",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SessionHost => "session host",
            Self::Staff => "staff",
            Self::Management => "management",
            Self::Echo => "echo",
        };
        f.write_str(name)
    }
}
