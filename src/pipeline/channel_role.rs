/// Which of the two monitored channels a message lives in.
///
/// The role decides both the eligibility rules (the request channel demands a
/// `.csr` attachment) and which classification branches apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    /// Certificate-request channel: `.csr` attachments only.
    Request,
    /// Mod-update channel: jar attachments, links, or mod-service pages.
    Mods,
}
