use crate::errors::AppError;

/// Query of `GET /quiz`, validated from the raw key/value pairs so that a
/// repeated `url` is rejected instead of silently keeping one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateQuizQuery {
    pub url: String,
}

impl TryFrom<Vec<(String, String)>> for GenerateQuizQuery {
    type Error = AppError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        // `url[]` and `url[key]` count as `url` too, so mixing them with a
        // plain `url` is a multi-value parameter.
        let mut urls = pairs
            .into_iter()
            .filter(|(key, _)| key == "url" || key.starts_with("url["));

        match (urls.next(), urls.next()) {
            (Some((key, url)), None) if key == "url" && !url.is_empty() => Ok(Self { url }),
            _ => Err(AppError::missing_video_url()),
        }
    }
}
