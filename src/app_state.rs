use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        providers::{OpenAiChatClient, YoutubeTranscriptFetcher},
        quiz_generator::ModelQuizGenerator,
        quiz_service::QuizService,
        transcript_service::VideoTranscriptSource,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    /// Wires the YouTube and OpenAI providers into the quiz service.
    pub fn new(config: &Config) -> AppResult<Self> {
        let fetcher = Arc::new(YoutubeTranscriptFetcher::new(
            config.transcript_languages.clone(),
        )?);
        let transcripts = Arc::new(VideoTranscriptSource::new(fetcher));

        let chat_client = Arc::new(OpenAiChatClient::new(config));
        let generator = Arc::new(ModelQuizGenerator::new(chat_client));

        Ok(Self::from_service(QuizService::new(transcripts, generator)))
    }

    pub fn from_service(quiz_service: QuizService) -> Self {
        Self {
            quiz_service: Arc::new(quiz_service),
        }
    }
}
