//! Interaction layer for the DISHA learning-path engine.
//!
//! HTTP implementations of the core trait boundaries: the Gemini
//! structured-generation client and the YouTube video lookup, plus the
//! configuration files both read their credentials from.

pub mod config;
mod gemini_client;
mod youtube_lookup;

pub use gemini_client::GeminiGenerationClient;
pub use youtube_lookup::YouTubeVideoLookup;
