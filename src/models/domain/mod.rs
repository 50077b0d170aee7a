pub mod quiz_question;
pub mod transcript;

pub use quiz_question::{AlternativeLabel, QuizAlternative, QuizPayload, QuizQuestion};
pub use transcript::{join_fragments, TranscriptFragment};
