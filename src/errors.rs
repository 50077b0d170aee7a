use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_openai::error::OpenAIError;
use serde::Serialize;
use thiserror::Error;

use crate::constants::messages::{INVALID_JSON_RESPONSE, INVALID_VIDEO_ID, MISSING_VIDEO_URL};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", INVALID_VIDEO_ID)]
    InvalidVideoId,

    #[error("{0}")]
    Upstream(String),

    #[error("{}", INVALID_JSON_RESPONSE)]
    InvalidModelOutput,

    /// A failure that carries only a raw payload and no message, such as a
    /// provider rejecting with a bare data object or string. Responds with a
    /// 500 whose body has no `error` field.
    #[error("{0}")]
    Unlabelled(serde_json::Value),
}

impl AppError {
    pub fn missing_video_url() -> Self {
        AppError::Validation(MISSING_VIDEO_URL.to_string())
    }

    /// The message exposed to clients, if the failure has one.
    pub fn message(&self) -> Option<String> {
        match self {
            AppError::Unlabelled(_) => None,
            other => Some(other.to_string()),
        }
    }
}

/// Error body. `error` is left out entirely when the failure has no message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidVideoId
            | AppError::Upstream(_)
            | AppError::InvalidModelOutput
            | AppError::Unlabelled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.message(),
        })
    }
}

impl From<OpenAIError> for AppError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(api_err) => AppError::Upstream(api_err.message),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
