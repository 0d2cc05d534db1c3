use std::collections::HashMap;
use std::sync::Mutex;

use modwarden::adapters::{Download, DownloadError, FileFetcher};
use serenity::async_trait;

enum MockResponse {
    Ok { final_url: String, bytes: Vec<u8> },
    Status(u16),
}

/// Canned HTTP responses keyed by request URL. Unknown URLs answer 404.
pub struct MockFileFetcher {
    responses: Mutex<HashMap<String, MockResponse>>,
}

impl MockFileFetcher {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
        }
    }

    /// Serve `bytes` for `url`, reporting `final_url` as the post-redirect
    /// location.
    pub fn ok(&self, url: &str, final_url: &str, bytes: &[u8]) {
        self.responses.lock().unwrap().insert(
            url.to_string(),
            MockResponse::Ok {
                final_url: final_url.to_string(),
                bytes: bytes.to_vec(),
            },
        );
    }

    pub fn status(&self, url: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), MockResponse::Status(status));
    }
}

#[async_trait]
impl FileFetcher for MockFileFetcher {
    async fn fetch(&self, url: &str) -> Result<Download, DownloadError> {
        match self.responses.lock().unwrap().get(url) {
            Some(MockResponse::Ok { final_url, bytes }) => Ok(Download {
                final_url: final_url.clone(),
                bytes: bytes.clone(),
            }),
            Some(MockResponse::Status(status)) => Err(DownloadError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(DownloadError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
