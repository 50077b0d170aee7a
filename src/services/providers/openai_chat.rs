use async_openai::{
    config::OpenAIConfig, types::chat::CreateChatCompletionRequest, Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{config::Config, errors::AppResult, services::quiz_generator::ChatCompletionClient};

pub struct OpenAiChatClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiChatClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(api_base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl ChatCompletionClient for OpenAiChatClient {
    async fn complete(&self, request: CreateChatCompletionRequest) -> AppResult<Option<String>> {
        let response = self.client.chat().create(request).await.map_err(|e| {
            log::warn!("Chat completion request failed: {}", e);
            e
        })?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
