use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::QuizPayload,
    services::{quiz_generator::QuizGenerator, transcript_service::TranscriptSource},
};

/// Runs transcript acquisition and quiz generation back to back. Failures
/// from either step are returned untouched.
pub struct QuizService {
    transcripts: Arc<dyn TranscriptSource>,
    generator: Arc<dyn QuizGenerator>,
}

impl QuizService {
    pub fn new(transcripts: Arc<dyn TranscriptSource>, generator: Arc<dyn QuizGenerator>) -> Self {
        Self {
            transcripts,
            generator,
        }
    }

    pub async fn generate_from_video(&self, video_url: &str) -> AppResult<QuizPayload> {
        let transcript = self.transcripts.transcript(video_url).await?;
        log::info!(
            "Transcript fetched ({} characters), generating quiz",
            transcript.len()
        );

        self.generator.generate(&transcript).await
    }
}
