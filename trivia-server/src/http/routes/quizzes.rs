//! Quiz endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use trivia_core::quiz;
use trivia_core::{Question, QuizScope};

use crate::http::body::QuizBody;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

/// POST /quizzes response; `question` is null once the pool is exhausted
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - a random question not yet shown
async fn play_quiz(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, ApiError> {
    let request = body.into_request()?;
    let scope = QuizScope::try_from(&request.category)?;

    let candidates = state
        .store()
        .quiz_candidates(scope, &request.previous)
        .await?;
    tracing::debug!(?scope, candidates = candidates.len(), "Quiz candidates");

    let question = quiz::pick(candidates, &mut rand::thread_rng());

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
