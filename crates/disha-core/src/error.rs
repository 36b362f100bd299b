//! Error types for the DISHA pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire generation and persistence pipeline.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum DishaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A required API credential is absent; reported before any network I/O
    #[error("Missing credential for {provider}")]
    MissingCredential { provider: &'static str },

    /// The generation service call failed, or its output could not be
    /// validated against the target schema
    #[error("Generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// A secondary enrichment lookup failed; absorbed by orchestrators,
    /// never surfaced to callers
    #[error("Enrichment unavailable: {reason}")]
    EnrichmentUnavailable { reason: String },

    /// A uniqueness precondition was violated by a duplicate request
    #[error("Already exists: {entity_type} '{id}'")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// An atomic write to the shared store failed; no partial state remains
    #[error("Persistence failed: {message}")]
    PersistenceFailed { message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DishaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a MissingCredential error
    pub fn missing_credential(provider: &'static str) -> Self {
        Self::MissingCredential { provider }
    }

    /// Creates a GenerationFailed error
    pub fn generation_failed(reason: impl Into<String>) -> Self {
        Self::GenerationFailed {
            reason: reason.into(),
        }
    }

    /// Creates an EnrichmentUnavailable error
    pub fn enrichment_unavailable(reason: impl Into<String>) -> Self {
        Self::EnrichmentUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates an AlreadyExists error
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a PersistenceFailed error
    pub fn persistence_failed(message: impl Into<String>) -> Self {
        Self::PersistenceFailed {
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an AlreadyExists error
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Check if this is a PersistenceFailed error
    pub fn is_persistence_failed(&self) -> bool {
        matches!(self, Self::PersistenceFailed { .. })
    }

    /// Check if this error should send a generation call site down its
    /// fallback branch.
    ///
    /// Returns true for:
    /// - `GenerationFailed` (service error or schema-invalid output)
    /// - `MissingCredential` (generation fails fast before network I/O)
    ///
    /// Both degrade identically at call sites that define fallback content.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailed { .. } | Self::MissingCredential { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DishaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DishaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DishaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DishaError>`.
pub type Result<T> = std::result::Result<T, DishaError>;
