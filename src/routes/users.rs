use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::favorites::UserFavorites,
    error::AppResult,
    middleware::auth::CurrentUser,
    models::User,
    response::MessageResponse,
    routes::params::{ApiQuery, EntityId, Pagination},
    services::user_service,
    state::AppState,
};

// `/favorites` is a static segment, so it takes priority over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/favorites", get(list_favorites))
        .route("/{id}", get(get_user))
}

#[utoipa::path(
    get,
    path = "/users",
    params(Pagination),
    responses(
        (status = 200, description = "List users", body = [User])
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(pagination): ApiQuery<Pagination>,
) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state, pagination).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<User>> {
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    responses(
        (status = 200, description = "Favorites of the current user", body = UserFavorites),
        (status = 401, description = "Invalid token", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
    ),
    security((), ("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<UserFavorites>> {
    let favorites = user_service::list_favorites(&state, &user).await?;
    Ok(Json(favorites))
}
