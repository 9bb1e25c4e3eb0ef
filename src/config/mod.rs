//! Configuration module for Recap.
//!
//! Handles loading application settings and resolving credentials once at startup.

mod settings;

pub use settings::{OpenAISettings, Settings, SummarySettings, YoutubeSettings, OPENAI_API_KEY_ENV};

/// Load a `.env` file from the working directory, if one exists.
///
/// Variables already present in the environment are not overwritten.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }
}
