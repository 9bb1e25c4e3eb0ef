//! Error types for Recap.

use thiserror::Error;

/// Library-level error type for Recap operations.
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("Transcripts are disabled for this video: {0}")]
    TranscriptsDisabled(String),

    #[error("No English transcript available for video: {0}")]
    NoTranscript(String),

    #[error("Video unavailable: {0}")]
    VideoUnavailable(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Recap operations.
pub type Result<T> = std::result::Result<T, RecapError>;
