use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    Set, SqlErr, TransactionTrait,
};

use crate::{
    entity::{
        favorites_people::{
            ActiveModel as FavPeopleActive, Column as FavPeopleCol, Entity as FavoritesPeople,
        },
        favorites_planets::{
            ActiveModel as FavPlanetActive, Column as FavPlanetCol, Entity as FavoritesPlanets,
        },
        people::Entity as People,
        planets::Entity as Planets,
        users::{Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    middleware::auth::CurrentUser,
    models::{FavoritePerson, FavoritePlanet},
    response::MessageResponse,
    state::AppState,
};

const PERSON_DUPLICATE: &str = "Person already in favorites.";
const PLANET_DUPLICATE: &str = "Planet already in favorites.";

pub async fn add_favorite_person(
    state: &AppState,
    subject: &CurrentUser,
    people_id: i32,
) -> AppResult<FavoritePerson> {
    let txn = state.orm.begin().await?;

    let user = require_user(&txn, subject).await?;
    let person = People::find_by_id(people_id).one(&txn).await?;
    let person = match person {
        Some(p) => p,
        None => return Err(AppError::NotFound("Person not found".into())),
    };

    let existing = FavoritesPeople::find()
        .filter(FavPeopleCol::UserId.eq(user.id))
        .filter(FavPeopleCol::PeopleId.eq(person.id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(PERSON_DUPLICATE.into()));
    }

    let favorite = FavPeopleActive {
        id: NotSet,
        user_id: Set(user.id),
        people_id: Set(person.id),
    }
    .insert(&txn)
    .await
    .map_err(|err| duplicate_or_db_error(err, PERSON_DUPLICATE))?;

    txn.commit().await?;

    tracing::info!(
        user_id = user.id,
        people_id = person.id,
        favorite_id = favorite.id,
        "favorite person added"
    );
    Ok(favorite.into())
}

pub async fn remove_favorite_person(
    state: &AppState,
    subject: &CurrentUser,
    people_id: i32,
) -> AppResult<MessageResponse> {
    let txn = state.orm.begin().await?;

    let user = require_user(&txn, subject).await?;
    let person = People::find_by_id(people_id).one(&txn).await?;
    let person = match person {
        Some(p) => p,
        None => return Err(AppError::NotFound("Person not found".into())),
    };

    let favorite = FavoritesPeople::find()
        .filter(FavPeopleCol::UserId.eq(user.id))
        .filter(FavPeopleCol::PeopleId.eq(person.id))
        .one(&txn)
        .await?;
    let favorite = match favorite {
        Some(f) => f,
        None => return Err(AppError::NotFound("Favorite person not found".into())),
    };

    let favorite_id = favorite.id;
    favorite.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        user_id = user.id,
        people_id = person.id,
        favorite_id,
        "favorite person removed"
    );
    Ok(MessageResponse::new("Favorite person deleted."))
}

pub async fn add_favorite_planet(
    state: &AppState,
    subject: &CurrentUser,
    planet_id: i32,
) -> AppResult<FavoritePlanet> {
    let txn = state.orm.begin().await?;

    let user = require_user(&txn, subject).await?;
    let planet = Planets::find_by_id(planet_id).one(&txn).await?;
    let planet = match planet {
        Some(p) => p,
        None => return Err(AppError::NotFound("Planet not found".into())),
    };

    let existing = FavoritesPlanets::find()
        .filter(FavPlanetCol::UserId.eq(user.id))
        .filter(FavPlanetCol::PlanetId.eq(planet.id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(PLANET_DUPLICATE.into()));
    }

    let favorite = FavPlanetActive {
        id: NotSet,
        user_id: Set(user.id),
        planet_id: Set(planet.id),
    }
    .insert(&txn)
    .await
    .map_err(|err| duplicate_or_db_error(err, PLANET_DUPLICATE))?;

    txn.commit().await?;

    tracing::info!(
        user_id = user.id,
        planet_id = planet.id,
        favorite_id = favorite.id,
        "favorite planet added"
    );
    Ok(favorite.into())
}

pub async fn remove_favorite_planet(
    state: &AppState,
    subject: &CurrentUser,
    planet_id: i32,
) -> AppResult<MessageResponse> {
    let txn = state.orm.begin().await?;

    let user = require_user(&txn, subject).await?;
    let planet = Planets::find_by_id(planet_id).one(&txn).await?;
    let planet = match planet {
        Some(p) => p,
        None => return Err(AppError::NotFound("Planet not found".into())),
    };

    let favorite = FavoritesPlanets::find()
        .filter(FavPlanetCol::UserId.eq(user.id))
        .filter(FavPlanetCol::PlanetId.eq(planet.id))
        .one(&txn)
        .await?;
    let favorite = match favorite {
        Some(f) => f,
        None => return Err(AppError::NotFound("Favorite planet not found".into())),
    };

    let favorite_id = favorite.id;
    favorite.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        user_id = user.id,
        planet_id = planet.id,
        favorite_id,
        "favorite planet removed"
    );
    Ok(MessageResponse::new("Favorite planet deleted."))
}

async fn require_user<C: ConnectionTrait>(db: &C, subject: &CurrentUser) -> AppResult<UserModel> {
    let user = Users::find_by_id(subject.user_id).one(db).await?;
    match user {
        Some(u) => Ok(u),
        None => Err(AppError::NotFound("User not found".into())),
    }
}

// A concurrent insert can slip past the existence check; the unique index catches it.
fn duplicate_or_db_error(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.into()),
        _ => AppError::OrmError(err),
    }
}
