//! Question endpoints
//!
//! `POST /questions` is both create and search; see
//! [`QuestionsBody::into_action`] for how the two are told apart.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use trivia_core::{category_map, CategoryMap, Pagination, Question, QuestionFilter};

use crate::http::body::{QuestionsAction, QuestionsBody};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, Page, PathId};
use crate::state::AppState;

/// GET /questions response
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
}

/// POST /questions (search) response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: Option<i32>,
}

/// POST /questions (create) response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: String,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// DELETE /questions/{id} response
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// GET /questions - one page of every question plus the category map
///
/// An empty page is a 404 even when the table is not empty.
async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let result = state.store().questions(&QuestionFilter::All, page).await?;
    if result.is_empty() {
        return Err(ApiError::not_found("questions page", page.page()));
    }

    let categories = category_map(state.store().categories().await?);

    Ok(Json(QuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        categories,
        current_category: None,
    }))
}

/// POST /questions - search when `searchTerm` is set, otherwise create
async fn create_or_search(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(body): JsonBody<QuestionsBody>,
) -> Result<Response, ApiError> {
    match body.into_action()? {
        QuestionsAction::Search(term) => {
            let result = state
                .store()
                .questions(&QuestionFilter::Search(term), page)
                .await?;

            Ok(Json(SearchResponse {
                success: true,
                questions: result.items,
                total_questions: result.total,
                current_category: None,
            })
            .into_response())
        }
        QuestionsAction::Create(new) => {
            let created = state.store().insert_question(new).await?;
            tracing::info!(id = created.id, "Created question");

            let (questions, total_questions) = full_listing(&state, page).await?;
            Ok(Json(CreatedResponse {
                success: true,
                created: created.question,
                questions,
                total_questions,
            })
            .into_response())
        }
    }
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    PathId(id): PathId,
    Page(page): Page,
) -> Result<Json<DeletedResponse>, ApiError> {
    if state.store().question(id).await?.is_none() {
        return Err(ApiError::not_found("question", id));
    }

    // Lost a race with a concurrent delete
    if !state.store().delete_question(id).await? {
        return Err(ApiError::not_found("question", id));
    }
    tracing::info!(id, "Deleted question");

    let (questions, total_questions) = full_listing(&state, page).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions,
        total_questions,
    }))
}

async fn full_listing(state: &AppState, page: Pagination) -> Result<(Vec<Question>, u64), ApiError> {
    let result = state.store().questions(&QuestionFilter::All, page).await?;
    Ok((result.items, result.total))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
}
