//! Membership toggle shared by session votes and suggestion votes.

/// Outcome of toggling an actor's membership in a vote set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteToggle {
    /// The actor was absent and has been added.
    Cast,
    /// The actor was present and has been removed.
    Retracted,
}

/// Toggles `actor` in `members`, preserving insertion order of the remaining entries.
///
/// Applying the same toggle twice restores the original set.
pub fn toggle_membership(members: &mut Vec<u64>, actor: u64) -> VoteToggle {
    if let Some(position) = members.iter().position(|id| *id == actor) {
        members.remove(position);
        VoteToggle::Retracted
    } else {
        members.push(actor);
        VoteToggle::Cast
    }
}

/// Removes every occurrence of `actor` from `members`.
pub fn remove_member(members: &mut Vec<u64>, actor: u64) {
    members.retain(|id| *id != actor);
}
