#![allow(dead_code)]

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use starwars_blog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{people, planets, users},
    services::auth_service::hash_password,
    state::AppState,
};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "use the force";

/// Fresh in-memory database with the schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut config = AppConfig::new("sqlite::memory:");
    config.jwt_secret = Some(TEST_SECRET.to_string());

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    run_migrations(&orm).await?;

    Ok(AppState::new(orm, config))
}

pub async fn create_user(state: &AppState, username: &str, is_active: bool) -> anyhow::Result<i32> {
    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        fullname: Set(format!("{username} fullname")),
        email: Set(format!("{username}@example.com")),
        password: Set(hash_password(TEST_PASSWORD)?),
        is_active: Set(is_active),
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_person(state: &AppState, name: &str, description: &str) -> anyhow::Result<i32> {
    let person = people::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(person.id)
}

pub async fn create_planet(state: &AppState, name: &str, description: &str) -> anyhow::Result<i32> {
    let planet = planets::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.to_string()),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet.id)
}
