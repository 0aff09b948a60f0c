//! Custom Axum extractors
//!
//! None of these ever produce axum's default plain-text rejections: a bad
//! path id is a 404, a bad body is a 422, and a bad `?page=` is page 1.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use trivia_core::{Pagination, PaginationParams};

use super::error::ApiError;

/// Integer id from the path. Anything that is not an `i32` is a 404, the
/// same as an unknown route.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("path", parts.uri.path()))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::not_found("id", &raw))
    }
}

/// Page number from `?page=`; never rejects.
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PaginationParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        Ok(Self(Pagination::from(params)))
    }
}

/// JSON body whose rejections map to 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::unprocessable(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn page_defaults_on_garbage() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/questions?page=abc")
            .body(())
            .unwrap()
            .into_parts();
        let Page(page) = Page::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(page.page(), 1);
    }

    #[tokio::test]
    async fn page_reads_number() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/questions?page=3&other=x")
            .body(())
            .unwrap()
            .into_parts();
        let Page(page) = Page::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(page.page(), 3);
    }

    #[tokio::test]
    async fn malformed_json_is_422() {
        let req = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let err = JsonBody::<serde_json::Value>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
