pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use quiz_handler::generate_quiz;

/// Registers the quiz route. Unparseable query strings are answered like a
/// missing `url`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default().error_handler(|_err, _req| AppError::missing_video_url().into()),
    )
    .service(generate_quiz);
}
