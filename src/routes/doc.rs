use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        favorites::UserFavorites,
    },
    models::{FavoritePerson, FavoritePlanet, Person, Planet, User},
    response::MessageResponse,
    routes::{auth, favorites, health, params, people, planets, sitemap, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        auth::login,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        users::list_users,
        users::get_user,
        users::list_favorites,
        favorites::add_favorite_planet,
        favorites::add_favorite_people,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_people
    ),
    components(
        schemas(
            Person,
            Planet,
            User,
            FavoritePerson,
            FavoritePlanet,
            UserFavorites,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            params::Pagination,
            sitemap::Sitemap,
            sitemap::RouteEntry,
            health::HealthData
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Sitemap", description = "Route listing"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "People", description = "People endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
