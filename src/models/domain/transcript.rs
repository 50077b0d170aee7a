use serde::{Deserialize, Serialize};

/// One timed piece of a video transcript, as returned by the provider.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TranscriptFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Joins fragment texts with single spaces. Fragments are not trimmed.
pub fn join_fragments(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
