use std::collections::HashMap;
use std::sync::Mutex;

use modwarden::adapters::DiscordService;
use serenity::async_trait;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};

use super::mock_message::MockMessage;

#[derive(Debug, Clone)]
pub struct SentFile {
    pub channel_id: ChannelId,
    pub content: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// In-memory Discord stand-in. Reactions the processor adds are fed back
/// into the reactor sets, so a second pass over the same message observes
/// the terminal state exactly like it would against the real API.
pub struct MockDiscordService {
    bot_id: UserId,
    messages: Mutex<HashMap<(ChannelId, MessageId), MockMessage>>,
    reactors: Mutex<HashMap<(MessageId, String), Vec<UserId>>>,
    roles: Mutex<HashMap<UserId, Vec<RoleId>>>,
    reactions: Mutex<Vec<(MessageId, String)>>,
    sent_files: Mutex<Vec<SentFile>>,
}

impl MockDiscordService {
    pub fn new(bot_id: u64) -> Self {
        Self {
            bot_id: UserId::new(bot_id),
            messages: Mutex::new(HashMap::new()),
            reactors: Mutex::new(HashMap::new()),
            roles: Mutex::new(HashMap::new()),
            reactions: Mutex::new(Vec::new()),
            sent_files: Mutex::new(Vec::new()),
        }
    }

    pub fn add_message(&self, message: MockMessage) {
        self.messages
            .lock()
            .unwrap()
            .insert((message.channel_id, message.id), message);
    }

    pub fn add_reactors(&self, message_id: u64, emoji: &str, users: &[u64]) {
        self.reactors
            .lock()
            .unwrap()
            .entry((MessageId::new(message_id), emoji.to_string()))
            .or_default()
            .extend(users.iter().map(|id| UserId::new(*id)));
    }

    pub fn set_roles(&self, user_id: u64, roles: &[u64]) {
        self.roles.lock().unwrap().insert(
            UserId::new(user_id),
            roles.iter().map(|id| RoleId::new(*id)).collect(),
        );
    }

    pub fn recorded_reactions(&self) -> Vec<(MessageId, String)> {
        self.reactions.lock().unwrap().clone()
    }

    pub fn sent_files(&self) -> Vec<SentFile> {
        self.sent_files.lock().unwrap().clone()
    }

    fn emoji_key(emoji: &ReactionType) -> String {
        match emoji {
            ReactionType::Unicode(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
impl DiscordService for MockDiscordService {
    type Message = MockMessage;

    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<MockMessage, serenity::Error> {
        self.messages
            .lock()
            .unwrap()
            .get(&(channel_id, message_id))
            .cloned()
            .ok_or(serenity::Error::Other("unknown message"))
    }

    async fn messages_before(
        &self,
        channel_id: ChannelId,
        before: MessageId,
        limit: u8,
    ) -> Result<Vec<MockMessage>, serenity::Error> {
        let mut page: Vec<MockMessage> = self
            .messages
            .lock()
            .unwrap()
            .values()
            .filter(|m| m.channel_id == channel_id && m.id < before)
            .cloned()
            .collect();
        page.sort_by(|a, b| b.id.cmp(&a.id));
        page.truncate(limit as usize);
        Ok(page)
    }

    async fn reactors(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<Vec<UserId>, serenity::Error> {
        Ok(self
            .reactors
            .lock()
            .unwrap()
            .get(&(message_id, Self::emoji_key(emoji)))
            .cloned()
            .unwrap_or_default())
    }

    async fn member_roles(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Vec<RoleId>, serenity::Error> {
        self.roles
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(serenity::Error::Other("member not found"))
    }

    async fn add_reaction(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), serenity::Error> {
        let key = Self::emoji_key(emoji);
        self.reactions
            .lock()
            .unwrap()
            .push((message_id, key.clone()));
        // The bot's reaction becomes visible to later reactor queries
        self.reactors
            .lock()
            .unwrap()
            .entry((message_id, key))
            .or_default()
            .push(self.bot_id);
        Ok(())
    }

    async fn send_file(
        &self,
        channel_id: ChannelId,
        content: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), serenity::Error> {
        self.sent_files.lock().unwrap().push(SentFile {
            channel_id,
            content: content.to_string(),
            filename: filename.to_string(),
            bytes,
        });
        Ok(())
    }
}
