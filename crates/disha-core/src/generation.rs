//! Structured generation client boundary.
//!
//! Defines the contract for the external generation service: given a prompt
//! and a target schema, produce raw structured output in exactly one
//! outbound call. Validation into a typed artifact happens on this side of
//! the boundary via [`generate_artifact`], so callers only ever observe a
//! validated value or a typed failure.

use serde_json::Value;

use crate::artifact::Artifact;
use crate::error::{DishaError, Result};

/// One generation request: an instruction plus the structural contract the
/// response must satisfy.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Value,
}

/// A structured-output completion service.
///
/// Implementations make exactly one outbound call per invocation, perform no
/// caching, and no internal retries (retries, if any, are the caller's
/// responsibility). Every call may produce different content; that is
/// accepted, not a bug.
///
/// # Failure modes
///
/// - `MissingCredential`: reported before any network I/O
/// - `GenerationFailed`: service error or output that is not valid JSON
#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    /// Invokes the generation service once and returns its raw JSON output.
    async fn generate(&self, request: &GenerationRequest) -> Result<Value>;
}

/// Runs one generation call and enforces the artifact's schema on the
/// response.
///
/// Malformed output (undeserializable or invariant-violating) is folded
/// into `GenerationFailed`, so invalid generation output can never reach
/// persistence as a generated artifact.
pub async fn generate_artifact<T: Artifact>(
    client: &dyn GenerationClient,
    prompt: String,
) -> Result<T> {
    let request = GenerationRequest {
        prompt,
        response_schema: T::response_schema(),
    };
    let value = client.generate(&request).await?;
    let artifact: T = serde_json::from_value(value).map_err(|err| {
        DishaError::generation_failed(format!(
            "{}: output does not match schema: {err}",
            T::KIND
        ))
    })?;
    artifact.validate()?;
    Ok(artifact)
}
