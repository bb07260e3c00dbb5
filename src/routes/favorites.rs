use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};

use crate::{
    error::AppResult,
    middleware::auth::CurrentUser,
    models::{FavoritePerson, FavoritePlanet},
    response::MessageResponse,
    routes::params::EntityId,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/people/{id}",
            post(add_favorite_people).delete(remove_favorite_people),
        )
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = FavoritePlanet),
        (status = 400, description = "Already in favorites or invalid id", body = MessageResponse),
        (status = 401, description = "Invalid token", body = MessageResponse),
        (status = 404, description = "User or planet not found", body = MessageResponse)
    ),
    security((), ("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    user: CurrentUser,
    EntityId(planet_id): EntityId,
) -> AppResult<(StatusCode, Json<FavoritePlanet>)> {
    let favorite = favorite_service::add_favorite_planet(&state, &user, planet_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = FavoritePerson),
        (status = 400, description = "Already in favorites or invalid id", body = MessageResponse),
        (status = 401, description = "Invalid token", body = MessageResponse),
        (status = 404, description = "User or person not found", body = MessageResponse)
    ),
    security((), ("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    user: CurrentUser,
    EntityId(people_id): EntityId,
) -> AppResult<(StatusCode, Json<FavoritePerson>)> {
    let favorite = favorite_service::add_favorite_person(&state, &user, people_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 401, description = "Invalid token", body = MessageResponse),
        (status = 404, description = "User, planet or favorite not found", body = MessageResponse)
    ),
    security((), ("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    user: CurrentUser,
    EntityId(planet_id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let resp = favorite_service::remove_favorite_planet(&state, &user, planet_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 401, description = "Invalid token", body = MessageResponse),
        (status = 404, description = "User, person or favorite not found", body = MessageResponse)
    ),
    security((), ("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    user: CurrentUser,
    EntityId(people_id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let resp = favorite_service::remove_favorite_person(&state, &user, people_id).await?;
    Ok(Json(resp))
}
