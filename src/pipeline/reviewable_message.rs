use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, MessageId, UserId};

/// One attachment of a message, reduced to what routing and resolution need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    pub filename: String,
    pub url: String,
}

/// Trait for messages flowing through the approval pipeline
///
/// This abstracts the properties the filter, router and processor read,
/// allowing the whole pipeline to be tested without serenity's `Message`
/// type or a live gateway.
pub trait ReviewableMessage {
    fn message_id(&self) -> MessageId;
    fn channel_id(&self) -> ChannelId;
    fn author_id(&self) -> UserId;
    fn author_name(&self) -> &str;
    fn content(&self) -> &str;
    fn attachments(&self) -> Vec<AttachmentRef>;
    fn embed_urls(&self) -> Vec<String>;
}

impl ReviewableMessage for Message {
    fn message_id(&self) -> MessageId {
        self.id
    }

    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    fn author_id(&self) -> UserId {
        self.author.id
    }

    fn author_name(&self) -> &str {
        &self.author.name
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn attachments(&self) -> Vec<AttachmentRef> {
        self.attachments
            .iter()
            .map(|attachment| AttachmentRef {
                filename: attachment.filename.clone(),
                url: attachment.url.clone(),
            })
            .collect()
    }

    fn embed_urls(&self) -> Vec<String> {
        self.embeds.iter().filter_map(|embed| embed.url.clone()).collect()
    }
}
