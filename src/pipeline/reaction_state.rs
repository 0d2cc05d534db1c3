use serenity::model::id::UserId;
use std::collections::HashSet;

/// Snapshot of the reactor sets that drive eligibility for one message.
///
/// `approvers` holds only reactors already confirmed to carry the approver
/// role; reactors whose guild membership could not be resolved are left out.
/// The three terminal sets are raw reactor lists, queried for the bot's own
/// id to detect messages that were already handled.
#[derive(Debug, Clone, Default)]
pub struct ReactionState {
    pub approvers: HashSet<UserId>,
    pub done: HashSet<UserId>,
    pub failed: HashSet<UserId>,
    pub unsupported: HashSet<UserId>,
}

impl ReactionState {
    /// True if the bot already left a terminal reaction on this message.
    pub fn has_terminal_reaction_from(&self, bot_id: UserId) -> bool {
        self.done.contains(&bot_id)
            || self.failed.contains(&bot_id)
            || self.unsupported.contains(&bot_id)
    }
}
