use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{
    errors::{AppError, AppResult},
    models::domain::TranscriptFragment,
    services::transcript_service::TranscriptFetcher,
};

/// Fetches captions from YouTube in the first available preferred language.
pub struct YoutubeTranscriptFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YoutubeTranscriptFetcher {
    pub fn new(languages: Vec<String>) -> AppResult<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            AppError::Upstream(format!("Failed to initialise transcript client: {}", e))
        })?;

        Ok(Self { api, languages })
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> AppResult<Vec<TranscriptFragment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| {
                log::warn!("Transcript fetch failed for video {}: {}", video_id, e);
                AppError::Upstream(e.to_string())
            })?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| TranscriptFragment::new(snippet.text, snippet.start, snippet.duration))
            .collect())
    }
}
