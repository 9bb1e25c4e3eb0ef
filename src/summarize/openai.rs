//! OpenAI chat completion implementation.

use super::{ChatMessage, Completer, CompletionRequest, Role};
use crate::config::{Settings, OPENAI_API_KEY_ENV};
use crate::error::{RecapError, Result};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Completion service backed by the OpenAI chat API.
///
/// Built without a client when no API key is configured; the missing key is then reported
/// by the first completion request.
pub struct OpenAICompleter {
    client: Option<async_openai::Client<OpenAIConfig>>,
}

impl OpenAICompleter {
    /// Create a completer from settings whose credentials are already resolved.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = settings
            .openai_api_key()
            .map(|key| create_client(&settings.openai, key))
            .transpose()?;

        Ok(Self { client })
    }
}

fn to_openai_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let built: std::result::Result<ChatCompletionRequestMessage, _> = match message.role {
        Role::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(message.content.clone())
            .build()
            .map(Into::into),
        Role::User => ChatCompletionRequestUserMessageArgs::default()
            .content(message.content.clone())
            .build()
            .map(Into::into),
    };
    built.map_err(|e| RecapError::Summarization(e.to_string()))
}

#[async_trait]
impl Completer for OpenAICompleter {
    #[instrument(skip(self, request), fields(model = %request.model))]
    #[allow(deprecated)]
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>> {
        let client = self.client.as_ref().ok_or_else(|| {
            RecapError::Config(format!(
                "OpenAI API key not configured. Set {} or [openai].api_key in {}",
                OPENAI_API_KEY_ENV,
                Settings::default_config_path().display()
            ))
        })?;

        let messages = request
            .messages
            .iter()
            .map(to_openai_message)
            .collect::<Result<Vec<_>>>()?;

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .temperature(request.temperature)
            .n(request.n)
            .max_tokens(request.max_tokens)
            .presence_penalty(request.presence_penalty)
            .frequency_penalty(request.frequency_penalty)
            .build()
            .map_err(|e| RecapError::Summarization(e.to_string()))?;

        let response = client.chat().create(openai_request).await.map_err(|e| {
            RecapError::OpenAI(format!("Failed to generate summary: {}", e))
        })?;

        debug!("Completion returned {} choices", response.choices.len());

        response
            .choices
            .into_iter()
            .map(|choice| {
                choice.message.content.ok_or_else(|| {
                    RecapError::Summarization("Completion choice has no content".to_string())
                })
            })
            .collect()
    }
}
