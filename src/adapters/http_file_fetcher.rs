use anyhow::Context as _;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serenity::async_trait;
use tracing::{debug, error};
use url::Url;

use super::file_fetcher::{Download, DownloadError, FileFetcher};

/// Identifying user agent sent with every download request.
const USER_AGENT: &str = concat!("modwarden (", env!("CARGO_PKG_VERSION"), ")");

/// Maximum redirect hops before a download is abandoned.
const MAX_REDIRECTS: usize = 10;

/// Implementation for downloads via reqwest.
pub struct HttpFileFetcher {
    client: reqwest::Client,
}

impl HttpFileFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .context("Building HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FileFetcher for HttpFileFetcher {
    async fn fetch(&self, url: &str) -> Result<Download, DownloadError> {
        let parsed = Url::parse(url).map_err(|source| DownloadError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .map_err(|source| DownloadError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let final_url = response.url().to_string();

        if status != StatusCode::OK {
            // Body kept out of the error, but logged for diagnostics.
            let body = response.text().await.unwrap_or_default();
            error!(%url, %status, %body, "Download rejected by server");
            return Err(DownloadError::Status {
                url: final_url,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| DownloadError::Transport {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        debug!(%url, %final_url, bytes = bytes.len(), "Download complete");
        Ok(Download { final_url, bytes })
    }
}
