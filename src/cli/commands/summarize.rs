//! Summarize command implementation.

use crate::cli::{Output, OutputFormat};
use crate::config::Settings;
use crate::orchestrator::{Orchestrator, SummaryOutcome};
use crate::video::extract_video_id;
use anyhow::Result;
use serde::Serialize;

/// JSON rendering of a summarize run.
#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    url: &'a str,
    video_id: Option<String>,
    outcome: &'static str,
    message: String,
}

impl<'a> SummaryReport<'a> {
    fn new(url: &'a str, outcome: &SummaryOutcome) -> Self {
        Self {
            url,
            video_id: extract_video_id(url),
            outcome: outcome.kind(),
            message: outcome.to_string(),
        }
    }
}

/// Run the summarize command.
///
/// Soft outcomes (invalid URL, no transcript) are printed and succeed; summarization
/// failures, including a missing API key, are returned.
pub async fn run_summarize(
    url: &str,
    model: Option<String>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<()> {
    let mut orchestrator = Orchestrator::new(settings)?;

    if let Some(model) = model {
        orchestrator = orchestrator.with_model(model);
    }

    let spinner = Output::spinner("Summarizing video...");
    let result = orchestrator.run(url).await;
    spinner.finish_and_clear();

    let outcome = result?;

    match format {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&SummaryReport::new(url, &outcome))?);
        }
    }

    Ok(())
}
