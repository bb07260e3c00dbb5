use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

use crate::{
    entity::people::{Column, Entity as People},
    error::{AppError, AppResult},
    models::Person,
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_people(state: &AppState, pagination: Pagination) -> AppResult<Vec<Person>> {
    let mut finder = People::find().order_by_asc(Column::Id);
    if let Some((limit, offset)) = pagination.normalize() {
        finder = finder.limit(limit).offset(offset);
    }

    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Person::from)
        .collect();
    Ok(items)
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<Person> {
    let person = People::find_by_id(id).one(&state.orm).await?;
    match person {
        Some(p) => Ok(p.into()),
        None => Err(AppError::NotFound("Person not found".into())),
    }
}
