use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Sitemap {
    pub message: String,
    pub endpoints: Vec<RouteEntry>,
}

const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/docs"),
    ("POST", "/auth/login"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/users/{id}"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
];

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every public endpoint", body = Sitemap),
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<Sitemap> {
    let endpoints = ROUTES
        .iter()
        .map(|(method, path)| RouteEntry {
            method: method.to_string(),
            path: path.to_string(),
        })
        .collect();

    Json(Sitemap {
        message: "Star Wars favorites API".to_string(),
        endpoints,
    })
}
