#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        AlternativeLabel, QuizAlternative, QuizPayload, QuizQuestion, TranscriptFragment,
    };

    /// A question with five alternatives where `correct` is the right one.
    pub fn sample_question(question: &str, correct: AlternativeLabel) -> QuizQuestion {
        QuizQuestion {
            question: question.to_string(),
            options: AlternativeLabel::ALL
                .iter()
                .map(|label| QuizAlternative {
                    option: *label,
                    text: format!("Alternativa {:?}", label),
                    correct: *label == correct,
                })
                .collect(),
            explanation: format!("A alternativa {:?} é a correta.", correct),
        }
    }

    pub fn sample_quiz() -> Vec<QuizQuestion> {
        vec![
            sample_question("O que é fotossíntese?", AlternativeLabel::B),
            sample_question("Onde ocorre a fotossíntese?", AlternativeLabel::D),
        ]
    }

    pub fn sample_quiz_payload() -> QuizPayload {
        serde_json::to_value(sample_quiz()).expect("sample quiz should serialize")
    }

    pub fn fragments(texts: &[&str]) -> Vec<TranscriptFragment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptFragment::new(*text, i as f64, 1.0))
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::AlternativeLabel;

    #[test]
    fn test_fixtures_sample_question_has_one_correct_option() {
        let question = sample_question("Q", AlternativeLabel::C);

        assert_eq!(question.options.len(), 5);
        let correct: Vec<_> = question.options.iter().filter(|o| o.correct).collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].option, AlternativeLabel::C);
    }

    #[test]
    fn test_fixtures_sample_quiz_payload_uses_lowercase_labels() {
        let payload = sample_quiz_payload();

        assert_eq!(payload[0]["options"][0]["option"], "a");
        assert_eq!(payload[1]["options"][3]["correct"], true);
    }

    #[test]
    fn test_fixtures_fragments_keep_order() {
        let fragments = fragments(&["um", "dois"]);

        assert_eq!(fragments[0].text, "um");
        assert_eq!(fragments[1].start, 1.0);
    }
}
