use log::debug;

use crate::acquisition::domain::error::AcquireError;
use crate::acquisition::domain::link_checker::LinkChecker;
use crate::shared::constants::{LINK_CHECK_TIMEOUT, YOUTUBE_OEMBED_URL};

/// Checks video existence via YouTube's oEmbed endpoint: a 200 response
/// means the video is there, a 4xx means it is not. Cheap (metadata only)
/// and needs no credential.
pub struct OembedChecker {
    http: reqwest::blocking::Client,
    oembed_url: String,
}

impl OembedChecker {
    pub fn new() -> Self {
        Self::with_oembed_url(YOUTUBE_OEMBED_URL)
    }

    pub fn with_oembed_url(oembed_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::builder()
                .timeout(LINK_CHECK_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
            oembed_url: oembed_url.into(),
        }
    }
}

impl Default for OembedChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkChecker for OembedChecker {
    fn exists(&self, video_url: &str) -> Result<bool, AcquireError> {
        let response = self
            .http
            .get(&self.oembed_url)
            .query(&[("url", video_url), ("format", "json")])
            .send()
            .map_err(|e| AcquireError::Download(e.to_string()))?;

        debug!("oembed check for {video_url}: HTTP {}", response.status());
        Ok(response.status().is_success())
    }
}
