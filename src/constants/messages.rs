//! Client-facing messages. The Portuguese wording is part of the HTTP contract.

pub const MISSING_VIDEO_URL: &str = "URL do vídeo é obrigatória e deve ser uma string.";

pub const INVALID_VIDEO_ID: &str = "ID de vídeo inválido!";

pub const INVALID_JSON_RESPONSE: &str = "A resposta da IA não está no formato JSON esperado.";
