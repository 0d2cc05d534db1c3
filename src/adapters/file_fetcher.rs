use serenity::async_trait;
use thiserror::Error;

/// A completed download: the bytes plus the URL that finally served them
/// after redirects, which is what names the saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub final_url: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum DownloadError {
    /// The server answered with something other than 200. The response body
    /// is logged at the fetch site, not carried here.
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("transport failure fetching {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid download url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Fetches remote files for the resolver.
///
/// Implementations must follow redirects and treat any non-200 answer as an
/// error; the resolver leans on `final_url` for filename derivation.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Download, DownloadError>;
}
