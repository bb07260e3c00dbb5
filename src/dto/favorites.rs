use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FavoritePerson, FavoritePlanet};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFavorites {
    pub favorite_people: Vec<FavoritePerson>,
    pub favorite_planet: Vec<FavoritePlanet>,
}
