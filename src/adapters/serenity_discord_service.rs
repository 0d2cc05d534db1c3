use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::{CreateAttachment, CreateMessage, GetMessages};
use serenity::http::Http;
use serenity::model::channel::{Message, ReactionType};
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};

use super::discord_service::DiscordService;

/// Number of reactors fetched per emoji; Discord's per-request maximum.
const REACTOR_PAGE: u8 = 100;

/// Implementation of Discord operations via Serenity's HTTP client.
pub struct SerenityDiscordService {
    http: Arc<Http>,
}

impl SerenityDiscordService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordService for SerenityDiscordService {
    type Message = Message;

    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, serenity::Error> {
        self.http.get_message(channel_id, message_id).await
    }

    async fn messages_before(
        &self,
        channel_id: ChannelId,
        before: MessageId,
        limit: u8,
    ) -> Result<Vec<Message>, serenity::Error> {
        channel_id
            .messages(&self.http, GetMessages::new().before(before).limit(limit))
            .await
    }

    async fn reactors(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<Vec<UserId>, serenity::Error> {
        let users = channel_id
            .reaction_users(&self.http, message_id, emoji.clone(), Some(REACTOR_PAGE), None)
            .await?;
        Ok(users.into_iter().map(|user| user.id).collect())
    }

    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Vec<RoleId>, serenity::Error> {
        let member = guild_id.member(&self.http, user_id).await?;
        Ok(member.roles)
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), serenity::Error> {
        channel_id
            .create_reaction(&self.http, message_id, emoji.clone())
            .await
    }

    async fn send_file(
        &self,
        channel_id: ChannelId,
        content: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), serenity::Error> {
        let builder = CreateMessage::new()
            .content(content)
            .add_file(CreateAttachment::bytes(bytes, filename));
        channel_id.send_message(&self.http, builder).await?;
        Ok(())
    }
}
