//! GeminiGenerationClient - structured-output client for the Gemini REST API.
//!
//! Sends `generateContent` requests with a response schema attached, so the
//! service is constrained to emit JSON matching the artifact contract.
//! Configuration is loaded from secret.json; a missing key fails fast with
//! `MissingCredential` before any network I/O.

use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use disha_core::error::{DishaError, Result};
use disha_core::generation::{GenerationClient, GenerationRequest};

use crate::config::{load_app_config, load_secret_config};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client implementation that talks to the Gemini HTTP API with structured
/// output enforced via `responseSchema`.
#[derive(Clone)]
pub struct GeminiGenerationClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiGenerationClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads configuration from secret.json and config.toml.
    ///
    /// The model name comes from secret.json when present, from config.toml
    /// otherwise. A missing gemini entry is a `MissingCredential`.
    pub fn try_from_config() -> Result<Self> {
        let secrets = load_secret_config()
            .map_err(|_| DishaError::missing_credential("gemini"))?;
        let gemini = secrets
            .gemini
            .ok_or_else(|| DishaError::missing_credential("gemini"))?;
        if gemini.api_key.trim().is_empty() {
            return Err(DishaError::missing_credential("gemini"));
        }

        let app_config = load_app_config().unwrap_or_default();
        let model = gemini
            .model_name
            .unwrap_or(app_config.generation.model);

        Ok(Self::new(gemini.api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                DishaError::generation_failed(format!("Gemini API request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            DishaError::generation_failed(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl GenerationClient for GeminiGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value> {
        if self.api_key.trim().is_empty() {
            return Err(DishaError::missing_credential("gemini"));
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            },
        };

        debug!(model = %self.model, "sending structured generation request");
        let text = self.send_request(&body).await?;

        serde_json::from_str(&text).map_err(|err| {
            DishaError::generation_failed(format!(
                "Gemini returned text that is not valid JSON: {err}"
            ))
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            DishaError::generation_failed("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> DishaError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    match retry_after {
        Some(delay) => DishaError::generation_failed(format!(
            "Gemini API error (HTTP {}, retry after {}s): {message}",
            status.as_u16(),
            delay.as_secs()
        )),
        None => DishaError::generation_failed(format!(
            "Gemini API error (HTTP {}): {message}",
            status.as_u16()
        )),
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}
