use serenity::model::id::UserId;

use super::channel_role::ChannelRole;
use super::reaction_state::ReactionState;
use super::reviewable_message::ReviewableMessage;

/// Decide whether a message is ready for action dispatch.
///
/// Pure function of the message, the current reactor sets, the channel role
/// and the bot's own identity; calling it twice with the same inputs always
/// yields the same answer. All rules must hold:
///
/// 1. The bot has not yet left a terminal reaction (Done/Failed/Unsupported)
///    on the message. This is the at-most-once guarantee: once the bot
///    reacts, the message is sticky in its terminal state.
/// 2. At least one role-holding moderator has reacted with 👍. The reactor
///    set is pre-filtered by [`ReactionState`]'s loader, so an unresolvable
///    reactor simply does not count as approving.
/// 3. Request channel only: the message carries at least one attachment and
///    one of them is a `.csr` file.
pub fn is_eligible<M: ReviewableMessage>(
    message: &M,
    reactions: &ReactionState,
    role: ChannelRole,
    bot_id: UserId,
) -> bool {
    if reactions.has_terminal_reaction_from(bot_id) {
        return false;
    }

    if reactions.approvers.is_empty() {
        return false;
    }

    match role {
        ChannelRole::Request => {
            let attachments = message.attachments();
            !attachments.is_empty()
                && attachments.iter().any(|a| a.filename.ends_with(".csr"))
        }
        // Mod-update messages need no attachment; unclassifiable content is
        // routed to Unsupported later, not rejected here.
        ChannelRole::Mods => true,
    }
}
