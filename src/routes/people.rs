use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    error::AppResult,
    models::Person,
    response::MessageResponse,
    routes::params::{ApiQuery, EntityId, Pagination},
    services::people_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people))
        .route("/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    params(Pagination),
    responses(
        (status = 200, description = "List people", body = [Person])
    ),
    tag = "People"
)]
pub async fn list_people(
    State(state): State<AppState>,
    ApiQuery(pagination): ApiQuery<Pagination>,
) -> AppResult<Json<Vec<Person>>> {
    let people = people_service::list_people(&state, pagination).await?;
    Ok(Json(people))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = Person),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Person not found", body = MessageResponse),
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Person>> {
    let person = people_service::get_person(&state, id).await?;
    Ok(Json(person))
}
