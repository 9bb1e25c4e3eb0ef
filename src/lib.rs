//! Recap - YouTube video summaries
//!
//! A small CLI tool that turns a YouTube video into a bullet-point summary.
//!
//! # Overview
//!
//! Recap:
//! - Extracts the video ID from a `watch?v=` or `youtu.be/` URL
//! - Fetches the video's English captions and joins them into one text
//! - Asks an OpenAI chat model to summarize that text in bullet points
//!
//! # Architecture
//!
//! - `config` - Configuration and credential loading
//! - `video` - URL parsing
//! - `transcript` - Transcript retrieval (YouTube captions)
//! - `summarize` - Summary generation (OpenAI chat completions)
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use recap::config::Settings;
//! use recap::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings)?;
//!
//!     let summary = orchestrator
//!         .summarize_video("https://www.youtube.com/watch?v=J-3zlPVQJqc")
//!         .await?;
//!     println!("{}", summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod summarize;
pub mod transcript;
pub mod video;

pub use error::{RecapError, Result};
