use serde::{Deserialize, Serialize};

/// Parsed generation output. Passed through to clients without checking it
/// against [`QuizQuestion`].
pub type QuizPayload = serde_json::Value;

/// The shape the generation prompt asks for. Callers expect exactly one
/// correct alternative per question; nothing enforces it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizAlternative>,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAlternative {
    pub option: AlternativeLabel,
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlternativeLabel {
    A,
    B,
    C,
    D,
    E,
}

impl AlternativeLabel {
    pub const ALL: [AlternativeLabel; 5] = [
        AlternativeLabel::A,
        AlternativeLabel::B,
        AlternativeLabel::C,
        AlternativeLabel::D,
        AlternativeLabel::E,
    ];
}
