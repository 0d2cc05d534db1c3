use serenity::model::id::{ChannelId, MessageId, UserId};

use super::reviewable_message::{AttachmentRef, ReviewableMessage};

/// Builder-style mock message for pipeline unit tests.
#[derive(Debug, Clone)]
pub struct MockMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub author_name: String,
    pub content: String,
    pub attachments: Vec<AttachmentRef>,
    pub embed_urls: Vec<String>,
}

impl MockMessage {
    pub fn new(id: u64) -> Self {
        Self {
            id: MessageId::new(id),
            channel_id: ChannelId::new(1),
            author_id: UserId::new(100),
            author_name: "requester".to_string(),
            content: String::new(),
            attachments: Vec::new(),
            embed_urls: Vec::new(),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn attach(mut self, filename: &str, url: &str) -> Self {
        self.attachments.push(AttachmentRef {
            filename: filename.to_string(),
            url: url.to_string(),
        });
        self
    }

    pub fn embed(mut self, url: &str) -> Self {
        self.embed_urls.push(url.to_string());
        self
    }
}

impl ReviewableMessage for MockMessage {
    fn message_id(&self) -> MessageId {
        self.id
    }

    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    fn author_id(&self) -> UserId {
        self.author_id
    }

    fn author_name(&self) -> &str {
        &self.author_name
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn attachments(&self) -> Vec<AttachmentRef> {
        self.attachments.clone()
    }

    fn embed_urls(&self) -> Vec<String> {
        self.embed_urls.clone()
    }
}
