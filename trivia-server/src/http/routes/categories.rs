//! Category endpoints

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use trivia_core::{category_map, CategoryMap, Question, QuestionFilter};

use crate::http::error::ApiError;
use crate::http::extractors::{Page, PathId};
use crate::state::AppState;

/// GET /categories response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// GET /categories/{id}/questions response
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: i32,
}

/// GET /categories - every category as `{id: type}`
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.store().categories().await?);
    if categories.is_empty() {
        return Err(ApiError::not_found("categories", "*"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn questions_for_category(
    State(state): State<AppState>,
    PathId(category_id): PathId,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let result = state
        .store()
        .questions(&QuestionFilter::Category(category_id), page)
        .await?;

    if result.is_empty() {
        return Err(ApiError::not_found("category page", category_id));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: category_id,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
}
