//! CLI command implementations.

mod config;
mod summarize;
mod transcript;

pub use config::run_config;
pub use summarize::run_summarize;
pub use transcript::run_transcript;
