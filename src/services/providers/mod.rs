pub mod openai_chat;
pub mod youtube_transcript;

pub use openai_chat::OpenAiChatClient;
pub use youtube_transcript::YoutubeTranscriptFetcher;
