/**
 * Request Body and URL Extractors
 *
 * Thin wrappers over axum's `Path`, `Query`, `Json` and `Form` whose
 * rejection is `BackendError`. A malformed id, query string or body becomes
 * a 400 with the usual `{ "error": ... }` body instead of axum's plain-text
 * rejection. The parser's own wording is logged, never returned.
 */

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// Path parameters, rejected as `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

/// Query string, rejected as `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

/// JSON body, rejected as `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

/// URL-encoded form body, rejected as `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiForm<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(BackendError::from)
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(BackendError::from)
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(BackendError::from)
    }
}

impl<S, T> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Form::<T>::from_request(req, state)
            .await
            .map(|Form(value)| ApiForm(value))
            .map_err(BackendError::from)
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        // Missing route params mean the route and handler disagree
        if rejection.status().is_server_error() {
            return BackendError::internal(rejection.body_text());
        }
        tracing::debug!("Rejected path: {}", rejection.body_text());
        BackendError::validation("path", "Invalid id in URL")
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        BackendError::validation("query", "Invalid query string")
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());
        BackendError::validation("body", "Invalid JSON body")
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!("Rejected form body: {}", rejection.body_text());
        BackendError::validation("body", "Invalid form body")
    }
}
