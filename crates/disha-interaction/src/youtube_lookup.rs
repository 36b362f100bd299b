//! YouTubeVideoLookup - video enrichment via the YouTube Data API v3.
//!
//! Resolves a free-text query to at most one watch URL. Built to degrade:
//! without an API credential every lookup is a silent "not found", and
//! transport failures surface as `EnrichmentUnavailable`, which callers
//! absorb by keeping the originally generated content.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use disha_core::error::{DishaError, Result};
use disha_core::video::{VideoLookup, VideoReference};

use crate::config::{load_app_config, load_secret_config};

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Lookup implementation backed by the YouTube search endpoint.
#[derive(Clone)]
pub struct YouTubeVideoLookup {
    client: Client,
    api_key: Option<String>,
    region_code: String,
}

impl YouTubeVideoLookup {
    /// Creates a new lookup with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: Some(api_key.into()),
            region_code: "IN".to_string(),
        }
    }

    /// Creates a lookup without a credential; every search resolves to
    /// `Ok(None)`.
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            region_code: "IN".to_string(),
        }
    }

    /// Loads configuration from secret.json and config.toml.
    ///
    /// A missing youtube entry yields a disabled lookup, not an error.
    pub fn from_config() -> Self {
        let api_key = load_secret_config()
            .ok()
            .and_then(|secrets| secrets.youtube)
            .map(|youtube| youtube.api_key)
            .filter(|key| !key.trim().is_empty());
        let region_code = load_app_config()
            .map(|config| config.lookup.region_code)
            .unwrap_or_else(|_| "IN".to_string());

        Self {
            client: Client::new(),
            api_key,
            region_code,
        }
    }

    /// Overrides the region code biasing search results.
    pub fn with_region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = region_code.into();
        self
    }
}

#[async_trait::async_trait]
impl VideoLookup for YouTubeVideoLookup {
    async fn find_video(&self, query: &str) -> Result<Option<VideoReference>> {
        let Some(api_key) = &self.api_key else {
            debug!("video lookup skipped: no credential configured");
            return Ok(None);
        };

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("regionCode", self.region_code.as_str()),
                ("q", query),
                ("key", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                DishaError::enrichment_unavailable(format!("YouTube search failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read YouTube error body".to_string());
            return Err(DishaError::enrichment_unavailable(format!(
                "YouTube search error (HTTP {}): {body}",
                status.as_u16()
            )));
        }

        let parsed: SearchResponse = response.json().await.map_err(|err| {
            DishaError::enrichment_unavailable(format!(
                "Failed to parse YouTube response: {err}"
            ))
        })?;

        Ok(first_video_reference(parsed))
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
    #[serde(default)]
    snippet: Option<Snippet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct Snippet {
    title: String,
}

fn first_video_reference(response: SearchResponse) -> Option<VideoReference> {
    response.items.into_iter().find_map(|item| {
        let video_id = item.id.video_id?;
        Some(VideoReference {
            title: item
                .snippet
                .map(|snippet| snippet.title)
                .unwrap_or_else(|| video_id.clone()),
            url: format!("https://www.youtube.com/watch?v={video_id}"),
        })
    })
}
