//! Summary generation through a chat completion service.

mod openai;

pub use openai::OpenAICompleter;

use crate::config::SummarySettings;
use crate::error::{RecapError, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A chat completion request with its sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub n: u8,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

/// Trait for chat completion services.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Run a completion and return the text of each candidate, in order.
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>>;
}

/// Summarizes text into bullet points.
#[derive(Clone)]
pub struct Summarizer {
    completer: Arc<dyn Completer>,
    settings: SummarySettings,
}

impl Summarizer {
    pub fn new(completer: Arc<dyn Completer>, settings: SummarySettings) -> Self {
        Self { completer, settings }
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.settings.model = model.into();
        self
    }

    /// Build the request sent for `text`.
    pub fn request_for(&self, text: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: self.settings.system_prompt.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: text.to_string(),
                },
            ],
            temperature: self.settings.temperature,
            n: self.settings.n,
            max_tokens: self.settings.max_tokens,
            presence_penalty: self.settings.presence_penalty,
            frequency_penalty: self.settings.frequency_penalty,
        }
    }

    /// Summarize `text`, returning the first candidate trimmed of surrounding whitespace.
    ///
    /// Completion service errors are returned to the caller unchanged.
    #[instrument(skip(self, text), fields(model = %self.settings.model, chars = text.len()))]
    pub async fn summarize(&self, text: &str) -> Result<String> {
        info!("Requesting summary");

        let request = self.request_for(text);
        let candidates = self.completer.complete(&request).await?;

        debug!("Received {} candidates", candidates.len());

        candidates
            .into_iter()
            .next()
            .map(|c| c.trim().to_string())
            .ok_or_else(|| RecapError::Summarization("Empty response from LLM".to_string()))
    }
}
