use super::channel_role::ChannelRole;
use super::reviewable_message::ReviewableMessage;

/// Web prefix identifying links that must go through the mod-hosting
/// redirect-resolution API instead of a direct download.
pub const MOD_SERVICE_PREFIX: &str = "https://www.curseforge.com/minecraft/";

/// The action an eligible message resolves to, carrying its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sign the first `.csr` attachment and reply with the certificate.
    SignCsr { url: String },
    /// Save the first `.jar` attachment under its original filename.
    SaveJarAttachment { url: String, filename: String },
    /// Save a `.jar` referenced by an embed URL.
    SaveJarEmbed { url: String },
    /// Save a `.jar` referenced by a plain-text URL in the message body.
    SaveJarUrl { url: String },
    /// Resolve a mod-service page link to its real download URL, then save.
    ResolveModService { url: String },
    /// Nothing we know how to handle; gets the 😒 reaction.
    Unsupported,
}

/// Classify an eligible message into its action.
///
/// First match wins; the order is load-bearing. A message carrying both a
/// `.jar` attachment and a `.jar` embed is handled via the attachment.
pub fn classify<M: ReviewableMessage>(message: &M, role: ChannelRole) -> Action {
    if role == ChannelRole::Request {
        return message
            .attachments()
            .into_iter()
            .find(|a| a.filename.ends_with(".csr"))
            .map(|a| Action::SignCsr { url: a.url })
            .unwrap_or(Action::Unsupported);
    }

    if let Some(attachment) = message
        .attachments()
        .into_iter()
        .find(|a| a.filename.ends_with(".jar"))
    {
        return Action::SaveJarAttachment {
            url: attachment.url,
            filename: attachment.filename,
        };
    }

    if let Some(url) = message
        .embed_urls()
        .into_iter()
        .find(|url| url.ends_with(".jar"))
    {
        return Action::SaveJarEmbed { url };
    }

    let content = message.content();
    if content.starts_with("http") && content.ends_with(".jar") {
        return Action::SaveJarUrl {
            url: content.to_string(),
        };
    }

    if content.starts_with(MOD_SERVICE_PREFIX) {
        return Action::ResolveModService {
            url: content.to_string(),
        };
    }

    Action::Unsupported
}
