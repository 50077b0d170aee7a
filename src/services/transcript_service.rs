use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(test)]
use mockall::automock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{join_fragments, TranscriptFragment},
};

static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\?v=|/embed/|\.be/)([a-zA-Z0-9_-]{11})")
        .expect("VIDEO_ID_PATTERN is a valid regex pattern")
});

/// Turns a video identifier into its timed transcript fragments.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, video_id: &str) -> AppResult<Vec<TranscriptFragment>>;
}

/// Turns a video reference into plain transcript text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn transcript(&self, video_url: &str) -> AppResult<String>;
}

/// Extracts the 11-character video identifier from a `?v=`, `/embed/` or
/// `.be/` URL. Longer identifiers are cut to their first 11 characters.
pub fn extract_video_id(video_url: &str) -> Option<&str> {
    VIDEO_ID_PATTERN
        .captures(video_url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

pub struct VideoTranscriptSource {
    fetcher: Arc<dyn TranscriptFetcher>,
}

impl VideoTranscriptSource {
    pub fn new(fetcher: Arc<dyn TranscriptFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl TranscriptSource for VideoTranscriptSource {
    async fn transcript(&self, video_url: &str) -> AppResult<String> {
        let video_id = extract_video_id(video_url).ok_or(AppError::InvalidVideoId)?;

        log::debug!("Fetching transcript for video {}", video_id);
        let fragments = self.fetcher.fetch(video_id).await?;
        log::debug!(
            "Fetched {} transcript fragments for video {}",
            fragments.len(),
            video_id
        );

        Ok(join_fragments(&fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::fragments;
    use serde_json::json;

    const VIDEO_ID: &str = "dQw4w9WgXcQ";

    fn source_expecting(video_id: &'static str, texts: &'static [&'static str]) -> VideoTranscriptSource {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .withf(move |id| id == video_id)
            .times(1)
            .returning(move |_| Ok(fragments(texts)));
        VideoTranscriptSource::new(Arc::new(fetcher))
    }

    fn source_never_fetching() -> VideoTranscriptSource {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher.expect_fetch().never();
        VideoTranscriptSource::new(Arc::new(fetcher))
    }

    #[test]
    fn extracts_id_from_supported_url_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s&list=PL123",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?feature=shared",
        ];

        for url in urls {
            assert_eq!(extract_video_id(url), Some(VIDEO_ID), "url: {url}");
        }
    }

    #[test]
    fn accepts_underscore_and_hyphen_in_ids() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=a-B_c1D2e3F"),
            Some("a-B_c1D2e3F")
        );
    }

    #[test]
    fn longer_ids_are_cut_to_eleven_characters() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQextralongid"),
            Some(VIDEO_ID)
        );
    }

    #[test]
    fn rejects_urls_without_an_id() {
        let urls = [
            "",
            "https://www.youtube.com/",
            "https://example.com/video",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/watch?list=dQw4w9WgXcQ",
        ];

        for url in urls {
            assert_eq!(extract_video_id(url), None, "url: {url}");
        }
    }

    #[actix_rt::test]
    async fn joins_fetched_fragments() {
        let source = source_expecting(
            VIDEO_ID,
            &["Hello", "world,", "this", "is", "a", "test."],
        );

        let text = source
            .transcript("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(text, "Hello world, this is a test.");
    }

    #[actix_rt::test]
    async fn empty_transcript_is_not_a_failure() {
        let source = source_expecting(VIDEO_ID, &[]);

        let text = source.transcript("https://youtu.be/dQw4w9WgXcQ").await.unwrap();

        assert_eq!(text, "");
    }

    #[actix_rt::test]
    async fn fetches_truncated_id_for_long_identifiers() {
        let source = source_expecting(VIDEO_ID, &["Single line transcript"]);

        let text = source
            .transcript("https://www.youtube.com/watch?v=dQw4w9WgXcQextralongid")
            .await
            .unwrap();

        assert_eq!(text, "Single line transcript");
    }

    #[actix_rt::test]
    async fn keeps_special_characters_and_whitespace() {
        let source = source_expecting(VIDEO_ID, &["  Olá  ", " ação & <tags> ", "  😀  "]);

        let text = source.transcript("https://youtu.be/dQw4w9WgXcQ").await.unwrap();

        assert_eq!(text, "  Olá    ação & <tags>    😀  ");
    }

    #[actix_rt::test]
    async fn invalid_url_fails_without_fetching() {
        let source = source_never_fetching();

        let err = source
            .transcript("https://example.com/not-a-video")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidVideoId));
        assert_eq!(err.to_string(), "ID de vídeo inválido!");
    }

    #[actix_rt::test]
    async fn empty_url_fails_without_fetching() {
        let source = source_never_fetching();

        let err = source.transcript("").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidVideoId));
    }

    #[actix_rt::test]
    async fn fetch_failures_propagate_unchanged() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(AppError::Upstream("Transcript not available".to_string())));
        let source = VideoTranscriptSource::new(Arc::new(fetcher));

        let err = source
            .transcript("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert_eq!(err.message().as_deref(), Some("Transcript not available"));
    }

    #[actix_rt::test]
    async fn unlabelled_fetch_failures_propagate_unchanged() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(AppError::Unlabelled(json!({ "code": "X" }))));
        let source = VideoTranscriptSource::new(Arc::new(fetcher));

        let err = source
            .transcript("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unlabelled(value) if value == json!({ "code": "X" })));
    }
}
