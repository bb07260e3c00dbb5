use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    error::AppResult,
    models::Planet,
    response::MessageResponse,
    routes::params::{ApiQuery, EntityId, Pagination},
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets))
        .route("/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    params(Pagination),
    responses(
        (status = 200, description = "List planets", body = [Planet])
    ),
    tag = "Planets"
)]
pub async fn list_planets(
    State(state): State<AppState>,
    ApiQuery(pagination): ApiQuery<Pagination>,
) -> AppResult<Json<Vec<Planet>>> {
    let planets = planet_service::list_planets(&state, pagination).await?;
    Ok(Json(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Planet not found", body = MessageResponse),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::get_planet(&state, id).await?;
    Ok(Json(planet))
}
