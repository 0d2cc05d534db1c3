use std::path::PathBuf;
use thiserror::Error;

use crate::adapters::cert_signer::SigningError;
use crate::adapters::file_fetcher::DownloadError;

/// Everything that can go wrong while acting on one approved message.
///
/// These never escape the processor: each one is logged and converted into
/// a ❌ reaction on the source message, leaving other in-flight messages and
/// the gateway subscription untouched.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    /// Save target already exists. Deliberately fail-fast: the file on disk
    /// was downloaded by an earlier approval and is not overwritten.
    #[error("refusing to overwrite existing file at {}", path.display())]
    FileExists { path: PathBuf },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("discord api call failed")]
    Discord(#[from] serenity::Error),
}
