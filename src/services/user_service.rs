use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    dto::favorites::UserFavorites,
    entity::{
        favorites_people::{Column as FavPeopleCol, Entity as FavoritesPeople},
        favorites_planets::{Column as FavPlanetCol, Entity as FavoritesPlanets},
        users::{Column, Entity as Users},
    },
    error::{AppError, AppResult},
    middleware::auth::CurrentUser,
    models::{FavoritePerson, FavoritePlanet, User},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_users(state: &AppState, pagination: Pagination) -> AppResult<Vec<User>> {
    let mut finder = Users::find().order_by_asc(Column::Id);
    if let Some((limit, offset)) = pagination.normalize() {
        finder = finder.limit(limit).offset(offset);
    }

    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(items)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    let user = Users::find_by_id(id).one(&state.orm).await?;
    match user {
        Some(u) => Ok(u.into()),
        None => Err(AppError::NotFound("User not found".into())),
    }
}

pub async fn list_favorites(state: &AppState, subject: &CurrentUser) -> AppResult<UserFavorites> {
    let user = Users::find_by_id(subject.user_id).one(&state.orm).await?;
    let user = match user {
        Some(u) => u,
        None => return Err(AppError::NotFound("User not found".into())),
    };

    let favorite_people = FavoritesPeople::find()
        .filter(FavPeopleCol::UserId.eq(user.id))
        .order_by_asc(FavPeopleCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(FavoritePerson::from)
        .collect();

    let favorite_planet = FavoritesPlanets::find()
        .filter(FavPlanetCol::UserId.eq(user.id))
        .order_by_asc(FavPlanetCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(FavoritePlanet::from)
        .collect();

    Ok(UserFavorites {
        favorite_people,
        favorite_planet,
    })
}
