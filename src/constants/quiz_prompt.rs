pub const QUIZ_MODEL: &str = "gpt-4o-mini";
pub const QUIZ_TEMPERATURE: f32 = 0.7;
pub const QUIZ_MAX_TOKENS: u32 = 4000;

pub const QUIZ_SYSTEM_PROMPT: &str = "Você é um gerador de quizzes educacionais em formato JSON.";

const QUIZ_INSTRUCTIONS: &str = r#"O seguinte texto é uma transcrição de uma aula educativa.
Com base nesse conteúdo, elabore 5 perguntas sobre o conteúdo que foi ensinado na aula com alternativas (a, b, c, d, e), indicando qual a correta e explicando o motivo.

Responda estritamente no seguinte formato JSON:

[
  {
    "question": "Texto da pergunta",
    "options": [
      {"option": "a", "text": "Texto", "correct": false},
      {"option": "b", "text": "Texto", "correct": true},
      {"option": "c", "text": "Texto", "correct": false},
      {"option": "d", "text": "Texto", "correct": false},
      {"option": "e", "text": "Texto", "correct": false}
    ],
    "explanation": "Texto da explicação da resposta correta"
  },
  ...
]

Aqui está o conteúdo:"#;

/// Builds the user prompt. The transcript is embedded verbatim between quotes.
pub fn build_quiz_prompt(transcript_text: &str) -> String {
    format!("{QUIZ_INSTRUCTIONS}\n\n\"{transcript_text}\"")
}
