mod mock_discord;
mod mock_fetcher;
mod mock_signer;

pub use mock_discord::MockDiscordService;
pub use mock_fetcher::MockFileFetcher;
pub use mock_message::MockMessage;
pub use mock_signer::MockCertSigner;
