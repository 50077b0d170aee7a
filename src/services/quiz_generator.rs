use std::{borrow::Cow, sync::Arc};

use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(test)]
use mockall::automock;

use crate::{
    constants::quiz_prompt::{
        build_quiz_prompt, QUIZ_MAX_TOKENS, QUIZ_MODEL, QUIZ_SYSTEM_PROMPT, QUIZ_TEMPERATURE,
    },
    errors::{AppError, AppResult},
    models::domain::QuizPayload,
};

static CODE_FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:json)?\n?([\s\S]*?)```").expect("CODE_FENCE_PATTERN is a valid regex pattern")
});

/// Sends a chat completion request and returns the first choice's content.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn complete(&self, request: CreateChatCompletionRequest) -> AppResult<Option<String>>;
}

/// Turns transcript text into a quiz.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, transcript_text: &str) -> AppResult<QuizPayload>;
}

/// Replaces the first fenced code block with its contents. Text around the
/// block is left as it is.
pub fn strip_code_fence(content: &str) -> Cow<'_, str> {
    CODE_FENCE_PATTERN.replace(content, "$1")
}

pub fn parse_quiz_payload(content: &str) -> AppResult<QuizPayload> {
    serde_json::from_str(&strip_code_fence(content)).map_err(|err| {
        log::error!("Erro ao parsear JSON: {}", err);
        AppError::InvalidModelOutput
    })
}

pub struct ModelQuizGenerator {
    client: Arc<dyn ChatCompletionClient>,
}

impl ModelQuizGenerator {
    pub fn new(client: Arc<dyn ChatCompletionClient>) -> Self {
        Self { client }
    }

    #[allow(deprecated)]
    fn build_request(transcript_text: &str) -> AppResult<CreateChatCompletionRequest> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(QUIZ_SYSTEM_PROMPT)
            .build()?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(build_quiz_prompt(transcript_text))
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(QUIZ_MODEL)
            .store(true)
            .messages(vec![
                ChatCompletionRequestMessage::System(system),
                ChatCompletionRequestMessage::User(user),
            ])
            .temperature(QUIZ_TEMPERATURE)
            .max_tokens(QUIZ_MAX_TOKENS)
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl QuizGenerator for ModelQuizGenerator {
    async fn generate(&self, transcript_text: &str) -> AppResult<QuizPayload> {
        let request = Self::build_request(transcript_text)?;

        log::debug!(
            "Requesting quiz from {} for a {} character transcript",
            QUIZ_MODEL,
            transcript_text.len()
        );
        let content = self.client.complete(request).await?.unwrap_or_default();

        parse_quiz_payload(&content)
    }
}
