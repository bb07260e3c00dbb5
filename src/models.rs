use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{favorites_people, favorites_planets, people, planets, users};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Public view of a user. The password column is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FavoritePerson {
    pub id: i32,
    pub user_id: i32,
    /// Id of the liked person.
    pub people: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: i32,
    /// Id of the liked planet.
    pub planet: i32,
}

impl From<people::Model> for Person {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            fullname: model.fullname,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<favorites_people::Model> for FavoritePerson {
    fn from(model: favorites_people::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            people: model.people_id,
        }
    }
}

impl From<favorites_planets::Model> for FavoritePlanet {
    fn from(model: favorites_planets::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet: model.planet_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_omits_password() {
        let user: User = users::Model {
            id: 1,
            username: "luke".into(),
            fullname: "Luke Skywalker".into(),
            email: "luke@rebellion.org".into(),
            password: "$argon2id$v=19$...".into(),
            is_active: true,
        }
        .into();

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["is_active"], true);
        assert_eq!(value["username"], "luke");
    }

    #[test]
    fn favorite_edges_expose_target_under_short_key() {
        let edge: FavoritePlanet = favorites_planets::Model {
            id: 7,
            user_id: 1,
            planet_id: 3,
        }
        .into();

        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 7, "user_id": 1, "planet": 3 }));
    }
}
