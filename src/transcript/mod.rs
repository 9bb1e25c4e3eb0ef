//! Transcript retrieval.
//!
//! A [`TranscriptApi`] returns timed caption segments for a video. The [`TranscriptFetcher`]
//! flattens them into a single text blob and turns every failure into "no transcript".

mod youtube;

pub use youtube::YoutubeTranscriptApi;

use crate::error::{RecapError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A single timed caption line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Caption text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Trait for transcript retrieval services.
#[async_trait]
pub trait TranscriptApi: Send + Sync {
    /// Fetch the English caption segments for a video, in playback order.
    ///
    /// Returns [`RecapError::TranscriptsDisabled`] when the video has no captions at all.
    async fn list_segments(&self, video_id: &str) -> Result<Vec<Segment>>;
}

/// Join segment texts with single spaces, preserving order. Timing is discarded.
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetches and flattens transcripts, reporting failures to the log.
#[derive(Clone)]
pub struct TranscriptFetcher {
    api: Arc<dyn TranscriptApi>,
}

impl TranscriptFetcher {
    pub fn new(api: Arc<dyn TranscriptApi>) -> Self {
        Self { api }
    }

    /// Fetch the transcript for a video as one string.
    ///
    /// Returns `None` when captions are disabled, when the service fails for any reason, or
    /// when the transcript has no text.
    #[instrument(skip(self))]
    pub async fn fetch_transcript(&self, video_id: &str) -> Option<String> {
        let segments = match self.api.list_segments(video_id).await {
            Ok(segments) => segments,
            Err(RecapError::TranscriptsDisabled(_)) => {
                warn!("Transcripts are disabled for this video: {}", video_id);
                return None;
            }
            Err(e) => {
                warn!("An error occurred while fetching transcript: {}", e);
                return None;
            }
        };

        debug!("Fetched {} transcript segments", segments.len());

        let text = join_segments(&segments);
        if text.is_empty() {
            info!("Transcript for {} has no text", video_id);
            return None;
        }

        Some(text)
    }
}
