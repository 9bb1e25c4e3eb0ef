//! Transcript command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::transcript_for_url;
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptApi};
use anyhow::Result;
use std::sync::Arc;

/// Run the transcript command.
pub async fn run_transcript(url: &str, settings: &Settings) -> Result<()> {
    let fetcher = TranscriptFetcher::new(Arc::new(YoutubeTranscriptApi::new(&settings.youtube)?));

    let spinner = Output::spinner("Fetching transcript...");
    let outcome = transcript_for_url(&fetcher, url).await;
    spinner.finish_and_clear();

    println!("{}", outcome);
    Ok(())
}
