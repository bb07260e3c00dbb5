use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: Option<u64>,
    /// Items per page, 1 to 100.
    pub per_page: Option<u64>,
}

impl Pagination {
    /// Returns `(limit, offset)`, or `None` when the caller asked for everything.
    pub fn normalize(&self) -> Option<(u64, u64)> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        // Postgres rejects an OFFSET beyond i64.
        let offset = (page - 1)
            .saturating_mul(per_page)
            .min(i64::MAX as u64);
        Some((per_page, offset))
    }
}

/// Integer record id taken from the single path parameter of a route.
///
/// Non-integer ids are rejected with a JSON `Validation` error instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        raw.trim()
            .parse::<i32>()
            .map(EntityId)
            .map_err(|_| AppError::Validation(format!("Invalid id `{raw}`: expected an integer")))
    }
}

/// `Query` whose rejection is a JSON `Validation` error.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// `Json` body whose rejection is a JSON `BadRequest` error.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
