use anyhow::Context as _;
use serde::Deserialize;
use serenity::model::id::{ChannelId, GuildId, RoleId};
use std::path::PathBuf;

use crate::pipeline::ChannelRole;

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Runtime configuration, loaded from the environment. All settings are
/// required except `OUTPUT_DIR`, which defaults to the working directory.
#[derive(Deserialize, Clone)]
pub struct Params {
    pub discord_token: String,
    /// Channel where members post certificate signing requests.
    pub request_channel: ChannelId,
    /// Channel where moderators post mod updates to fetch.
    pub mods_channel: ChannelId,
    pub guild: GuildId,
    /// Role whose members' 👍 reactions count as approval.
    pub approver_role: RoleId,
    /// External command the CSR is piped through; stdout is the certificate.
    pub signer_command: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        if s.is_empty() {
            return "<empty>".to_string();
        }
        return format!("{}***", &s[..1]);
    }

    format!(
        "{}***{}",
        &s[..VISIBLE_CHARS],
        &s[s.len() - VISIBLE_CHARS..]
    )
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("request_channel", &self.request_channel)
            .field("mods_channel", &self.mods_channel)
            .field("guild", &self.guild)
            .field("approver_role", &self.approver_role)
            .field("signer_command", &self.signer_command)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// Role of a channel in the pipeline, `None` for unmonitored channels.
    pub fn channel_role(&self, channel_id: ChannelId) -> Option<ChannelRole> {
        if channel_id == self.request_channel {
            Some(ChannelRole::Request)
        } else if channel_id == self.mods_channel {
            Some(ChannelRole::Mods)
        } else {
            None
        }
    }
}
