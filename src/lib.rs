//! Reaction-gated Discord moderation bot.
//!
//! Watches a certificate-request channel and a mod-update channel. Messages
//! become eligible once a moderator holding the approver role reacts with 👍;
//! the bot then either signs the attached certificate request and replies
//! with the generated certificate, or downloads the referenced mod file to a
//! local directory. Processing state is never stored: it is re-derived from
//! the reactions currently on each message, so a restart simply replays
//! channel history and picks up where it left off.

pub mod adapters;
pub mod params;
pub mod pipeline;
