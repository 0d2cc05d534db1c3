// Trait definitions
pub mod cert_signer;
pub mod discord_service;
pub mod file_fetcher;

// Implementations
pub mod command_cert_signer;
pub mod http_file_fetcher;
pub mod serenity_discord_service;

// Re-exports for convenience
pub use cert_signer::{CertSigner, SigningError};
pub use command_cert_signer::CommandCertSigner;
pub use discord_service::DiscordService;
pub use file_fetcher::{Download, DownloadError, FileFetcher};
pub use http_file_fetcher::HttpFileFetcher;
pub use serenity_discord_service::SerenityDiscordService;
