use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use tracing::{debug, error, info};

use serenity::async_trait;
use serenity::gateway::ActivityData;
use serenity::model::channel::Reaction;
use serenity::model::gateway::Ready;
use serenity::model::user::OnlineStatus;
use serenity::prelude::*;

use modwarden::adapters::{CommandCertSigner, HttpFileFetcher, SerenityDiscordService};
use modwarden::params::Params;
use modwarden::pipeline::{ChannelRole, MessageProcessor, ReactionKind};

type Pipeline = MessageProcessor<SerenityDiscordService, HttpFileFetcher, CommandCertSigner>;

struct Handler {
    params: Arc<Params>,
    // Built in the ready event, once the bot's own user id is known
    pipeline: OnceLock<Arc<Pipeline>>,
}

impl Handler {
    fn new(params: Params) -> Handler {
        Handler {
            params: Arc::new(params),
            pipeline: OnceLock::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            display_name = %ready.user.display_name(),
            user_id = %ready.user.id,
            "Bot is connected"
        );

        let fetcher = match HttpFileFetcher::new() {
            Ok(fetcher) => Arc::new(fetcher),
            Err(err) => {
                error!(?err, "Failed to build download client");
                return;
            }
        };
        let processor = Arc::new(MessageProcessor::new(
            Arc::new(SerenityDiscordService::new(ctx.http.clone())),
            fetcher,
            Arc::new(CommandCertSigner::new(&self.params.signer_command)),
            self.params.guild,
            self.params.approver_role,
            ready.user.id,
            self.params.output_dir.clone(),
        ));

        // Ready fires again after a reconnect; keep the first pipeline and
        // only replay history once. Presence is re-applied every time.
        let first_ready = self.pipeline.set(processor.clone()).is_ok();
        set_watching_presence(&ctx, &self.params).await;

        if first_ready {
            let request_channel = self.params.request_channel;
            tokio::spawn(async move {
                processor.catch_up(ChannelRole::Request, request_channel).await;
            });
        }
    }

    async fn reaction_add(&self, _ctx: Context, reaction: Reaction) {
        // Not ready yet: the startup replay will pick the message up
        let Some(pipeline) = self.pipeline.get() else {
            return;
        };

        // Only 👍 on a monitored channel enters the pipeline
        if !ReactionKind::Approve.matches(&reaction.emoji) {
            return;
        }
        let Some(role) = self.params.channel_role(reaction.channel_id) else {
            return;
        };

        // Per-message work runs in its own task so slow downloads never
        // block dispatch of unrelated events.
        let pipeline = pipeline.clone();
        tokio::spawn(async move {
            pipeline
                .process(role, reaction.channel_id, reaction.message_id)
                .await;
        });
    }
}

/// Show the monitored channels in the bot's presence line.
async fn set_watching_presence(ctx: &Context, params: &Params) {
    let mut names = Vec::new();
    for channel_id in [params.request_channel, params.mods_channel] {
        match channel_id.to_channel(&ctx.http).await {
            Ok(channel) => {
                if let Some(guild_channel) = channel.guild() {
                    names.push(guild_channel.name);
                }
            }
            Err(err) => {
                debug!(%channel_id, ?err, "Could not resolve monitored channel name");
            }
        }
    }

    ctx.set_presence(
        Some(ActivityData::watching(names.join(", "))),
        OnlineStatus::Online,
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber for structured logging
    // Default: modwarden=info, serenity=warn (suppress serenity's normal operation logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modwarden=info,serenity=warn".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&params.discord_token, intents)
        .event_handler(Handler::new(params))
        .await
        .context("Creating Discord Client")?;

    // Close the gateway session cleanly on ctrl-c; in-flight downloads are
    // abandoned, their messages simply stay pending until the next replay.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, closing gateway session");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await.context("Running Discord Client")
}
