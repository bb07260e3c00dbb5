use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::AppResult,
    response::MessageResponse,
    routes::params::ApiJson,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse),
        (status = 403, description = "User is not active", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth_service::login(&state, payload).await?;
    Ok(Json(resp))
}
