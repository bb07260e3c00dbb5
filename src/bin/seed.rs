use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use starwars_blog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{people, planets, users},
    services::auth_service::hash_password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let password = std::env::var("SEED_USER_PASSWORD").unwrap_or_else(|_| "user123".to_string());
    let user_id = ensure_user(
        &orm,
        "luke",
        "Luke Skywalker",
        "luke@rebellion.org",
        &password,
    )
    .await?;
    seed_people(&orm).await?;
    seed_planets(&orm).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    username: &str,
    fullname: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    let existing = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(orm)
        .await?;
    if let Some(user) = existing {
        println!("User {username} already present");
        return Ok(user.id);
    }

    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        fullname: Set(fullname.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        is_active: Set(true),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {username}");
    Ok(user.id)
}

async fn seed_people(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let entries = vec![
        ("Luke Skywalker", "Farm boy from Tatooine turned Jedi Knight."),
        ("Leia Organa", "Princess of Alderaan and leader of the Rebel Alliance."),
        ("Han Solo", "Smuggler and captain of the Millennium Falcon."),
        ("Darth Vader", "Sith Lord and enforcer of the Galactic Empire."),
    ];

    for (name, description) in entries {
        let exists = people::Entity::find()
            .filter(people::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        people::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(description.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded people");
    Ok(())
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let entries = vec![
        ("Tatooine", "Desert world orbiting twin suns in the Outer Rim."),
        ("Alderaan", "Peaceful planet of mountains and culture."),
        ("Hoth", "Frozen world that hid Echo Base."),
        ("Dagobah", "Swamp planet and refuge of Master Yoda."),
    ];

    for (name, description) in entries {
        let exists = planets::Entity::find()
            .filter(planets::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        planets::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(description.to_string()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}
