//! Configuration file management for DISHA.
//!
//! Secrets (API keys) live in `~/.config/disha/secret.json`; tunables live
//! in `~/.config/disha/config.toml`. A missing config file yields defaults;
//! a missing secret entry is reported by the consumer (fail-fast for
//! generation, silent not-found for video lookup).

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use disha_core::error::{DishaError, Result};

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
    #[serde(default)]
    pub youtube: Option<YouTubeConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// YouTube Data API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    pub api_key: String,
}

/// Tunables loaded from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub lookup: LookupSettings,
}

/// Generation service tunables
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    /// Model name used when secret.json does not override it
    #[serde(default = "GenerationSettings::default_model")]
    pub model: String,
}

impl GenerationSettings {
    fn default_model() -> String {
        "gemini-2.5-flash".to_string()
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Self::default_model(),
        }
    }
}

/// Video lookup tunables
#[derive(Debug, Clone, Deserialize)]
pub struct LookupSettings {
    /// ISO 3166-1 region code biasing search results
    #[serde(default = "LookupSettings::default_region")]
    pub region_code: String,
}

impl LookupSettings {
    fn default_region() -> String {
        "IN".to_string()
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            region_code: Self::default_region(),
        }
    }
}

/// Loads the secret configuration file from ~/.config/disha/secret.json
pub fn load_secret_config() -> Result<SecretConfig> {
    load_secret_config_from(&config_dir()?.join("secret.json"))
}

/// Loads the application configuration from ~/.config/disha/config.toml,
/// falling back to defaults when the file does not exist.
pub fn load_app_config() -> Result<AppConfig> {
    load_app_config_from(&config_dir()?.join("config.toml"))
}

fn load_secret_config_from(path: &Path) -> Result<SecretConfig> {
    if !path.exists() {
        return Err(DishaError::config(format!(
            "Configuration file not found at: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| DishaError::config(format!("Failed to read {}: {e}", path.display())))?;

    serde_json::from_str(&content)
        .map_err(|e| DishaError::config(format!("Failed to parse {}: {e}", path.display())))
}

fn load_app_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| DishaError::config(format!("Failed to read {}: {e}", path.display())))?;

    Ok(toml::from_str(&content)?)
}

/// Returns the configuration directory: ~/.config/disha
fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DishaError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("disha"))
}
