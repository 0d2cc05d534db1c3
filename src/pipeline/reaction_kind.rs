use serenity::model::channel::ReactionType;

/// The four reaction emoji driving the approval state machine.
///
/// `Approve` is the trigger; the other three are terminal markers the bot
/// leaves behind, and their presence is what makes reprocessing a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    /// 👍 — a moderator approves the message.
    Approve,
    /// ✔ — the requested action completed.
    Done,
    /// ❌ — the action was attempted and failed.
    Failed,
    /// 😒 — the message matched no supported content shape.
    Unsupported,
}

impl ReactionKind {
    pub fn unicode(self) -> &'static str {
        match self {
            Self::Approve => "\u{1f44d}",
            Self::Done => "\u{2714}",
            Self::Failed => "\u{274c}",
            Self::Unsupported => "\u{1f612}",
        }
    }

    pub fn emoji(self) -> ReactionType {
        ReactionType::Unicode(self.unicode().to_string())
    }

    /// Check whether a gateway reaction payload carries this emoji.
    pub fn matches(self, reaction: &ReactionType) -> bool {
        reaction.unicode_eq(self.unicode())
    }
}
