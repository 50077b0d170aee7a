use std::env;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TRANSCRIPT_LANGUAGES: &str = "pt,en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingOpenAiApiKey,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub transcript_languages: Vec<String>,
}

impl Config {
    /// Reads configuration from the process environment. Call
    /// `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|base| !base.trim().is_empty()),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: parse_port(env::var("PORT").ok().as_deref()),
            transcript_languages: parse_languages(
                &env::var("TRANSCRIPT_LANGUAGES")
                    .unwrap_or_else(|_| DEFAULT_TRANSCRIPT_LANGUAGES.to_string()),
            ),
        }
    }

    /// Rejects configurations the generation client cannot work with.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingOpenAiApiKey);
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: None,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: DEFAULT_PORT,
            transcript_languages: vec!["pt".to_string(), "en".to_string()],
        }
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}

fn parse_languages(raw: &str) -> Vec<String> {
    let languages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .collect();

    if languages.is_empty() {
        parse_languages(DEFAULT_TRANSCRIPT_LANGUAGES)
    } else {
        languages
    }
}
