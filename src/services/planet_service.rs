use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

use crate::{
    entity::planets::{Column, Entity as Planets},
    error::{AppError, AppResult},
    models::Planet,
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_planets(state: &AppState, pagination: Pagination) -> AppResult<Vec<Planet>> {
    let mut finder = Planets::find().order_by_asc(Column::Id);
    if let Some((limit, offset)) = pagination.normalize() {
        finder = finder.limit(limit).offset(offset);
    }

    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(items)
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<Planet> {
    let planet = Planets::find_by_id(id).one(&state.orm).await?;
    match planet {
        Some(p) => Ok(p.into()),
        None => Err(AppError::NotFound("Planet not found".into())),
    }
}
