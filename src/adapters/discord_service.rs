use serenity::async_trait;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};

use crate::pipeline::reviewable_message::ReviewableMessage;

/// Gateway-independent view of the Discord REST operations the pipeline
/// needs. All calls are remote and fallible; the processor decides per call
/// whether a failure is fatal for the message or merely conservative.
#[async_trait]
pub trait DiscordService: Send + Sync {
    type Message: ReviewableMessage + Send + Sync;

    /// Fetch a full message, including attachments and embeds.
    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Self::Message, serenity::Error>;

    /// A page of messages strictly before `before`, newest first.
    async fn messages_before(
        &self,
        channel_id: ChannelId,
        before: MessageId,
        limit: u8,
    ) -> Result<Vec<Self::Message>, serenity::Error>;

    /// Users who reacted to a message with the given emoji.
    async fn reactors(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<Vec<UserId>, serenity::Error>;

    /// Role ids held by a guild member.
    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Vec<RoleId>, serenity::Error>;

    /// Add a reaction to a message. Adding an already-present reaction is
    /// not an error, which keeps terminal reactions idempotent.
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), serenity::Error>;

    /// Send a message with one file attached.
    async fn send_file(
        &self,
        channel_id: ChannelId,
        content: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), serenity::Error>;
}
