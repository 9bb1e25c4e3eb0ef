//! Pipeline orchestrator for Recap.
//!
//! Runs URL parsing, transcript retrieval and summarization in sequence. Invalid URLs and
//! missing transcripts end the run with a message; summarization failures are errors.

use crate::config::Settings;
use crate::error::Result;
use crate::summarize::{Completer, OpenAICompleter, Summarizer};
use crate::transcript::{TranscriptApi, TranscriptFetcher, YoutubeTranscriptApi};
use crate::video::VideoRef;
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

/// Final result of summarizing one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The generated summary.
    Summary(String),
    /// The URL did not contain a recognizable video ID.
    InvalidUrl { url: String },
    /// No transcript could be retrieved, or it was empty.
    NoTranscript { url: String },
}

impl SummaryOutcome {
    /// Short machine-readable name of the outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryOutcome::Summary(_) => "summary",
            SummaryOutcome::InvalidUrl { .. } => "invalid_url",
            SummaryOutcome::NoTranscript { .. } => "no_transcript",
        }
    }
}

impl fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryOutcome::Summary(summary) => write!(f, "{}", summary),
            SummaryOutcome::InvalidUrl { url } => write!(f, "Invalid YouTube URL: {}", url),
            SummaryOutcome::NoTranscript { url } => {
                write!(f, "No English transcript found for this video: {}", url)
            }
        }
    }
}

/// Outcome of the transcript stages alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutcome {
    Transcript(String),
    InvalidUrl { url: String },
    NoTranscript { url: String },
}

impl fmt::Display for TranscriptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptOutcome::Transcript(text) => write!(f, "{}", text),
            TranscriptOutcome::InvalidUrl { url } => {
                write!(f, "{}", SummaryOutcome::InvalidUrl { url: url.clone() })
            }
            TranscriptOutcome::NoTranscript { url } => {
                write!(f, "{}", SummaryOutcome::NoTranscript { url: url.clone() })
            }
        }
    }
}

/// Run the URL parsing and transcript stages for `url`.
#[instrument(skip(fetcher))]
pub async fn transcript_for_url(fetcher: &TranscriptFetcher, url: &str) -> TranscriptOutcome {
    let video = VideoRef::parse(url);

    let Some(video_id) = video.video_id else {
        info!("No video ID in URL");
        return TranscriptOutcome::InvalidUrl { url: video.url };
    };

    match fetcher.fetch_transcript(&video_id).await {
        Some(text) => TranscriptOutcome::Transcript(text),
        None => TranscriptOutcome::NoTranscript { url: video.url },
    }
}

/// The main orchestrator for the Recap pipeline.
#[derive(Clone)]
pub struct Orchestrator {
    fetcher: TranscriptFetcher,
    summarizer: Summarizer,
}

impl Orchestrator {
    /// Create an orchestrator talking to YouTube and OpenAI.
    ///
    /// A missing API key does not fail here; it surfaces only if a run reaches summarization.
    pub fn new(settings: &Settings) -> Result<Self> {
        let transcripts: Arc<dyn TranscriptApi> =
            Arc::new(YoutubeTranscriptApi::new(&settings.youtube)?);
        let completer: Arc<dyn Completer> = Arc::new(OpenAICompleter::new(settings)?);

        Ok(Self::with_components(settings, transcripts, completer))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        settings: &Settings,
        transcripts: Arc<dyn TranscriptApi>,
        completer: Arc<dyn Completer>,
    ) -> Self {
        Self {
            fetcher: TranscriptFetcher::new(transcripts),
            summarizer: Summarizer::new(completer, settings.summary.clone()),
        }
    }

    /// Override the completion model for this orchestrator.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.summarizer = self.summarizer.with_model(model);
        self
    }

    /// Parse the URL and fetch its transcript.
    pub async fn transcript(&self, url: &str) -> TranscriptOutcome {
        transcript_for_url(&self.fetcher, url).await
    }

    /// Summarize a video, returning the outcome of the first stage that ends the run.
    ///
    /// Only summarization failures are returned as `Err`.
    #[instrument(skip(self))]
    pub async fn run(&self, url: &str) -> Result<SummaryOutcome> {
        let transcript = match self.transcript(url).await {
            TranscriptOutcome::Transcript(text) => text,
            TranscriptOutcome::InvalidUrl { url } => return Ok(SummaryOutcome::InvalidUrl { url }),
            TranscriptOutcome::NoTranscript { url } => {
                return Ok(SummaryOutcome::NoTranscript { url })
            }
        };

        let summary = self.summarizer.summarize(&transcript).await?;
        Ok(SummaryOutcome::Summary(summary))
    }

    /// Summarize a video and render the result as the user-facing string.
    pub async fn summarize_video(&self, url: &str) -> Result<String> {
        self.run(url).await.map(|outcome| outcome.to_string())
    }
}
