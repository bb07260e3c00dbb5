use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use crate::{error::AppError, services::auth_service, state::AppState};

/// The user a favorites request acts on.
///
/// Resolved from an `Authorization: Bearer <jwt>` header when present,
/// otherwise from the configured default subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(CurrentUser {
                user_id: state.config.default_user_id,
            });
        };

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".into()))?;

        let claims = auth_service::decode_token(&state.config, token)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::Unauthorized("Invalid user id in token".into()))?;

        Ok(CurrentUser { user_id })
    }
}
