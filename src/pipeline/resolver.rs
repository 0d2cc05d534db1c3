use std::sync::Arc;

use tracing::{debug, info};

use super::error::PipelineError;
use crate::adapters::file_fetcher::FileFetcher;

/// Terminal artifact of resolution: a filename and the bytes behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Derive a filename from a URL: everything after the last `/`, trimmed.
pub fn derive_filename(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).trim().to_string()
}

/// Endpoint of the mod-hosting redirect-resolution API. Answers with the
/// actual download URL for a file id as plain text.
fn mod_service_endpoint(file_id: &str) -> String {
    format!("https://addons-ecs.forgesvc.net/api/v2/addon/0/file/{file_id}/download-url")
}

/// Resolves the supported URL shapes down to file contents.
///
/// The fetcher is injected so tests can stub both ordinary downloads and the
/// mod-service indirection.
pub struct FileResolver<F: FileFetcher> {
    fetcher: Arc<F>,
}

impl<F: FileFetcher> FileResolver<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Download a URL, returning the raw bytes. Used where the caller
    /// already knows the target filename (attachments, CSR contents).
    pub async fn fetch_raw(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        let download = self.fetcher.fetch(url).await?;
        Ok(download.bytes)
    }

    /// Download a URL and name the result after the URL that finally served
    /// it, so redirected downloads keep their server-side filename.
    pub async fn fetch(&self, url: &str) -> Result<ResolvedFile, PipelineError> {
        let download = self.fetcher.fetch(url).await?;
        let filename = derive_filename(&download.final_url);
        debug!(%url, %filename, bytes = download.bytes.len(), "Resolved download");
        Ok(ResolvedFile {
            filename,
            bytes: download.bytes,
        })
    }

    /// Resolve a mod-service page link: the trailing path segment is the
    /// file id, the redirect API answers with the real download URL, and the
    /// real URL is then fetched like any plain link.
    pub async fn fetch_via_mod_service(&self, page_url: &str) -> Result<ResolvedFile, PipelineError> {
        let file_id = derive_filename(page_url);
        let lookup = self.fetcher.fetch(&mod_service_endpoint(&file_id)).await?;
        let actual_url = String::from_utf8_lossy(&lookup.bytes).trim().to_string();
        info!(%page_url, %actual_url, "Mod service resolved download location");
        self.fetch(&actual_url).await
    }
}
