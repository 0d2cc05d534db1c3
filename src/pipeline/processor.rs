use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};
use serenity::model::mention::Mentionable;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

use super::approval;
use super::channel_role::ChannelRole;
use super::error::PipelineError;
use super::reaction_kind::ReactionKind;
use super::reaction_state::ReactionState;
use super::resolver::FileResolver;
use super::reviewable_message::ReviewableMessage;
use super::router::{self, Action};
use crate::adapters::{CertSigner, DiscordService, FileFetcher};

/// History page size for the startup replay; Discord's per-request maximum.
const HISTORY_PAGE: u8 = 100;

/// Milliseconds between the Unix epoch and Discord's snowflake epoch.
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A message id whose timestamp is "now", used as the replay anchor.
fn snowflake_now() -> MessageId {
    let unix_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(DISCORD_EPOCH_MS);
    MessageId::new((unix_ms.saturating_sub(DISCORD_EPOCH_MS) << 22).max(1))
}

/// Runs the approval pipeline for one message at a time: load reaction
/// state, check eligibility, classify, resolve, act, and leave exactly one
/// terminal reaction. Holds no per-message state of its own, so the same
/// message may be handed to it any number of times from the live stream and
/// the startup replay.
pub struct MessageProcessor<D, F, S>
where
    D: DiscordService,
    F: FileFetcher,
    S: CertSigner,
{
    discord: Arc<D>,
    resolver: FileResolver<F>,
    signer: Arc<S>,
    guild_id: GuildId,
    approver_role: RoleId,
    bot_id: UserId,
    output_dir: PathBuf,
}

impl<D, F, S> MessageProcessor<D, F, S>
where
    D: DiscordService,
    F: FileFetcher,
    S: CertSigner,
{
    pub fn new(
        discord: Arc<D>,
        fetcher: Arc<F>,
        signer: Arc<S>,
        guild_id: GuildId,
        approver_role: RoleId,
        bot_id: UserId,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            discord,
            resolver: FileResolver::new(fetcher),
            signer,
            guild_id,
            approver_role,
            bot_id,
            output_dir,
        }
    }

    /// Entry point for live reaction events: fetch the message, then run the
    /// pipeline. Never returns an error; failures end up as log entries and,
    /// where a message is at hand, a ❌ reaction.
    pub async fn process(&self, role: ChannelRole, channel_id: ChannelId, message_id: MessageId) {
        let message = match self.discord.message(channel_id, message_id).await {
            Ok(message) => message,
            Err(err) => {
                error!(%channel_id, %message_id, ?err, "Could not fetch message for processing");
                return;
            }
        };
        self.process_message(role, &message).await;
    }

    /// Run the full pipeline for one message. This is the error boundary:
    /// everything past the eligibility check converts into a terminal
    /// reaction rather than propagating.
    pub async fn process_message(&self, role: ChannelRole, message: &D::Message) {
        let message_id = message.message_id();

        let reactions = match self.load_reaction_state(message).await {
            Ok(reactions) => reactions,
            Err(err) => {
                error!(%message_id, ?err, "Could not load reaction state, skipping");
                return;
            }
        };

        if !approval::is_eligible(message, &reactions, role, self.bot_id) {
            debug!(%message_id, ?role, "Message not eligible");
            return;
        }

        let action = router::classify(message, role);
        debug!(%message_id, ?action, "Message classified");

        if action == Action::Unsupported {
            info!(%message_id, "No supported content shape, marking unsupported");
            self.react(message, ReactionKind::Unsupported).await;
            return;
        }

        match self.run_action(message, &action).await {
            Ok(()) => {
                info!(%message_id, ?action, "Action completed");
                self.react(message, ReactionKind::Done).await;
            }
            Err(err) => {
                error!(%message_id, ?action, %err, "Action failed");
                self.react(message, ReactionKind::Failed).await;
            }
        }
    }

    /// Replay a channel's history so messages approved while the bot was
    /// offline are caught up. The live stream may race this over the same
    /// messages; the terminal-reaction check makes the second pass a no-op.
    pub async fn catch_up(&self, role: ChannelRole, channel_id: ChannelId) {
        info!(%channel_id, ?role, "Replaying channel history for missed approvals");
        let mut before = snowflake_now();
        let mut seen = 0usize;

        loop {
            let page = match self
                .discord
                .messages_before(channel_id, before, HISTORY_PAGE)
                .await
            {
                Ok(page) => page,
                Err(err) => {
                    error!(%channel_id, ?err, "History replay aborted");
                    return;
                }
            };

            let Some(oldest) = page.last().map(|m| m.message_id()) else {
                break;
            };
            seen += page.len();

            for message in &page {
                self.process_message(role, message).await;
            }
            before = oldest;
        }

        info!(%channel_id, messages = seen, "History replay complete");
    }

    /// Build the reactor-set snapshot for one message. Approvers are
    /// filtered down to holders of the approver role here; a reactor whose
    /// membership cannot be resolved conservatively does not approve.
    async fn load_reaction_state(&self, message: &D::Message) -> Result<ReactionState, serenity::Error> {
        let channel_id = message.channel_id();
        let message_id = message.message_id();
        let mut state = ReactionState::default();

        let thumbs = self
            .discord
            .reactors(channel_id, message_id, &ReactionKind::Approve.emoji())
            .await?;
        for user_id in thumbs {
            match self.discord.member_roles(self.guild_id, user_id).await {
                Ok(roles) if roles.contains(&self.approver_role) => {
                    state.approvers.insert(user_id);
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%user_id, ?err, "Could not resolve reactor roles, not counting as approval");
                }
            }
        }

        for (kind, set) in [
            (ReactionKind::Done, &mut state.done),
            (ReactionKind::Failed, &mut state.failed),
            (ReactionKind::Unsupported, &mut state.unsupported),
        ] {
            let reactors = self
                .discord
                .reactors(channel_id, message_id, &kind.emoji())
                .await?;
            set.extend(reactors);
        }

        Ok(state)
    }

    async fn run_action(&self, message: &D::Message, action: &Action) -> Result<(), PipelineError> {
        match action {
            Action::SignCsr { url } => self.sign_and_reply(message, url).await,
            Action::SaveJarAttachment { url, filename } => {
                let bytes = self.resolver.fetch_raw(url).await?;
                self.save_file(filename, &bytes).await
            }
            Action::SaveJarEmbed { url } | Action::SaveJarUrl { url } => {
                let file = self.resolver.fetch(url).await?;
                self.save_file(&file.filename, &file.bytes).await
            }
            Action::ResolveModService { url } => {
                let file = self.resolver.fetch_via_mod_service(url).await?;
                self.save_file(&file.filename, &file.bytes).await
            }
            // Routed to the 😒 reaction before actions run.
            Action::Unsupported => Ok(()),
        }
    }

    /// Download the CSR, pass it through the signer and reply to the
    /// requester with the certificate attached as `<username>.pem`.
    async fn sign_and_reply(&self, message: &D::Message, url: &str) -> Result<(), PipelineError> {
        let csr = self.resolver.fetch_raw(url).await?;
        let cert = self.signer.sign(&csr).await?;

        let username = message.author_name();
        info!(%username, "Generating certificate");

        let content = format!(
            "{} your certificate is here. Download and install it in your servermods folder.",
            message.author_id().mention()
        );
        self.discord
            .send_file(
                message.channel_id(),
                &content,
                &format!("{username}.pem"),
                cert,
            )
            .await?;
        Ok(())
    }

    /// Write bytes under the output directory. An existing file at the
    /// target path fails the action; nothing is overwritten.
    async fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), PipelineError> {
        let path = self.output_dir.join(filename);
        info!(path = %path.display(), bytes = bytes.len(), "Saving downloaded file");

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::AlreadyExists {
                    PipelineError::FileExists { path: path.clone() }
                } else {
                    PipelineError::Write {
                        path: path.clone(),
                        source,
                    }
                }
            })?;

        file.write_all(bytes).await.map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "File download complete");
        Ok(())
    }

    /// Apply a terminal reaction. Add-reaction is idempotent on Discord's
    /// side, so a concurrent duplicate pass is harmless; a failure here is
    /// logged and dropped because there is no further recovery.
    async fn react(&self, message: &D::Message, kind: ReactionKind) {
        if let Err(err) = self
            .discord
            .add_reaction(message.channel_id(), message.message_id(), &kind.emoji())
            .await
        {
            error!(
                message_id = %message.message_id(),
                emoji = kind.unicode(),
                ?err,
                "Failed to add terminal reaction"
            );
        }
    }
}
