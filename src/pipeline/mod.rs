mod approval;
mod channel_role;
mod error;
mod processor;
mod reaction_kind;
mod reaction_state;
mod resolver;
pub mod reviewable_message;
mod router;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use approval::is_eligible;
pub use channel_role::ChannelRole;
pub use error::PipelineError;
pub use processor::MessageProcessor;
pub use reaction_kind::ReactionKind;
pub use reaction_state::ReactionState;
pub use resolver::{FileResolver, ResolvedFile, derive_filename};
pub use reviewable_message::{AttachmentRef, ReviewableMessage};
pub use router::{Action, MOD_SERVICE_PREFIX, classify};
