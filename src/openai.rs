//! OpenAI client configuration.

use crate::config::OpenAISettings;
use crate::error::Result;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client with the configured base URL and request timeout.
pub fn create_client(openai: &OpenAISettings, api_key: &str) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(openai.timeout_seconds))
        .build()?;

    let config = OpenAIConfig::new()
        .with_api_key(api_key)
        .with_api_base(&openai.api_base);

    Ok(Client::with_config(config).with_http_client(http_client))
}
