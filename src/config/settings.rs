//! Configuration settings for Recap.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when no API key is set in the config file.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub openai: OpenAISettings,
    pub summary: SummarySettings,
    pub youtube: YoutubeSettings,
}

/// Completion service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    /// API key. Falls back to `OPENAI_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Base URL of the API.
    pub api_base: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            timeout_seconds: 300,
        }
    }
}

/// Summary request settings: model, instruction and sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    /// Completion model.
    pub model: String,
    /// System instruction sent ahead of the transcript.
    pub system_prompt: String,
    pub temperature: f32,
    /// Number of candidates requested.
    pub n: u8,
    /// Maximum generated tokens.
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            system_prompt: "Please summarize the provided text in bullet points".to_string(),
            temperature: 0.2,
            n: 1,
            max_tokens: 200,
            presence_penalty: 0.0,
            frequency_penalty: 0.1,
        }
    }
}

/// YouTube transcript retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// Base URL for watch pages.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recap")
            .join("config.toml")
    }

    /// The configured OpenAI API key. Empty values count as unset.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }

    /// Fill in the API key from `OPENAI_API_KEY` when the config file sets none.
    ///
    /// Called once at startup; nothing else reads the environment for credentials.
    pub fn resolve_credentials(&mut self) {
        self.apply_env_api_key(std::env::var(OPENAI_API_KEY_ENV).ok());
    }

    fn apply_env_api_key(&mut self, env_key: Option<String>) {
        if self.openai_api_key().is_none() {
            self.openai.api_key = env_key.filter(|k| !k.trim().is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary_settings() {
        let settings = Settings::default();
        assert_eq!(settings.summary.model, "gpt-3.5-turbo");
        assert_eq!(settings.summary.temperature, 0.2);
        assert_eq!(settings.summary.n, 1);
        assert_eq!(settings.summary.max_tokens, 200);
        assert_eq!(settings.summary.presence_penalty, 0.0);
        assert_eq!(settings.summary.frequency_penalty, 0.1);
        assert_eq!(settings.youtube.base_url, "https://www.youtube.com");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("[summary]\nmodel = \"gpt-4o-mini\"\n").unwrap();
        assert_eq!(settings.summary.model, "gpt-4o-mini");
        assert_eq!(settings.summary.max_tokens, 200);
        assert_eq!(settings.openai.api_base, "https://api.openai.com/v1");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[summary]\nmax_tokens = 512\n[youtube]\ntimeout_seconds = 5\n").unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.summary.max_tokens, 512);
        assert_eq!(loaded.youtube.timeout_seconds, 5);
        assert_eq!(loaded.summary.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[summary\n").unwrap();

        assert!(matches!(
            Settings::load_from(Some(&path)),
            Err(crate::error::RecapError::TomlParse(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.summary.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_configured_api_key_wins() {
        let mut settings = Settings::default();
        settings.openai.api_key = Some("sk-from-file".to_string());
        settings.apply_env_api_key(Some("sk-from-env".to_string()));
        assert_eq!(settings.openai_api_key(), Some("sk-from-file"));
    }

    #[test]
    fn test_env_api_key_fills_gap() {
        let mut settings = Settings::default();
        settings.openai.api_key = Some("  ".to_string());
        settings.apply_env_api_key(Some("sk-from-env".to_string()));
        assert_eq!(settings.openai_api_key(), Some("sk-from-env"));
    }

    #[test]
    fn test_no_api_key_anywhere() {
        let mut settings = Settings::default();
        settings.apply_env_api_key(Some(String::new()));
        assert_eq!(settings.openai_api_key(), None);

        settings.apply_env_api_key(None);
        assert_eq!(settings.openai_api_key(), None);
    }
}
