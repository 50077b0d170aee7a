use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::RequestId,
    models::dto::request::GenerateQuizQuery,
};

/// Generates a quiz from the transcript of the video in `?url=`.
#[get("/quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
    request_id: RequestId,
) -> Result<HttpResponse, AppError> {
    let query = GenerateQuizQuery::try_from(query.into_inner())?;

    match state.quiz_service.generate_from_video(&query.url).await {
        Ok(quiz) => Ok(HttpResponse::Ok().json(quiz)),
        Err(err) => {
            log::error!("Quiz generation failed for request {}: {:?}", request_id, err);
            Err(err)
        }
    }
}
