//! Video lookup boundary.
//!
//! A secondary enrichment service: free-text query in, zero or one playable
//! video reference out. Lookup failures never escalate past the
//! orchestrator; the generated placeholder content is kept instead.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A playable video reference resolved by enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoReference {
    pub title: String,
    /// URL-like identifier, e.g. a YouTube watch URL
    pub url: String,
}

/// A free-text video search service.
///
/// Absence of an API credential is a valid, silent `Ok(None)` outcome, not
/// an error. Transport failures are reported as `EnrichmentUnavailable` and
/// absorbed by callers.
#[async_trait::async_trait]
pub trait VideoLookup: Send + Sync {
    /// Searches for one video matching the query.
    async fn find_video(&self, query: &str) -> Result<Option<VideoReference>>;
}

/// Extracts the video id from a YouTube URL stored in module content.
///
/// Accepts `youtu.be/`, `watch?v=`, and `embed/` forms. Returns `None` for
/// non-YouTube content (e.g. a module whose enrichment never resolved).
pub fn youtube_video_id(content: &str) -> Option<String> {
    let pattern =
        Regex::new(r"(?:youtu\.be/|youtube\.com/watch\?v=|youtube\.com/embed/)([^#&?]+)").ok()?;
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_video_id_forms() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s",
        ] {
            assert_eq!(youtube_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn test_youtube_video_id_rejects_plain_text() {
        assert!(youtube_video_id("Overview of cross-platform development.").is_none());
        assert!(youtube_video_id("").is_none());
    }
}
