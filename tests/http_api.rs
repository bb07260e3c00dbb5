mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use starwars_blog_api::routes::build_app;

use common::{TEST_PASSWORD, create_person, create_planet, create_user, setup_state};

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn people_lookup_and_missing_ids() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let id = create_person(&state, "Leia Organa", "Rebel leader").await?;
    let app = build_app(state);

    let (status, body) = send(&app, Method::GET, &format!("/people/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "name": "Leia Organa", "description": "Rebel leader" })
    );

    let (status, body) = send(&app, Method::GET, "/people/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Person not found" }));

    let (status, body) = send(&app, Method::GET, "/people/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("abc"));

    let (status, body) = send(&app, Method::GET, "/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn users_listing_hides_passwords() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let id = create_user(&state, "luke", true).await?;
    let app = build_app(state);

    let (status, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], id);
    assert_eq!(users[0]["is_active"], true);
    assert!(users[0].get("password").is_none());

    let (status, body) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "luke");

    Ok(())
}

#[tokio::test]
async fn planet_favorite_round_trip_for_default_user() -> anyhow::Result<()> {
    let state = setup_state().await?;
    // First user gets id 1, the default subject.
    create_user(&state, "luke", true).await?;
    let planet = create_planet(&state, "Tatooine", "Desert").await?;
    let app = build_app(state);

    let uri = format!("/favorite/planet/{planet}");
    let (status, edge) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(edge["user_id"], 1);
    assert_eq!(edge["planet"], planet);

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Planet already in favorites." }));

    let (status, body) = send(&app, Method::GET, "/users/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["favorite_planet"], json!([edge]));
    assert_eq!(body["favorite_people"], json!([]));

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Favorite planet deleted." }));

    let (status, body) = send(&app, Method::GET, "/users/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["favorite_planet"], json!([]));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn people_favorite_delete_removes_only_that_edge() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_user(&state, "luke", true).await?;
    let han = create_person(&state, "Han Solo", "Smuggler").await?;
    let chewie = create_person(&state, "Chewbacca", "Wookiee").await?;
    let app = build_app(state);

    let (status, _) = send(&app, Method::POST, &format!("/favorite/people/{han}"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, kept) = send(&app, Method::POST, &format!("/favorite/people/{chewie}"), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::DELETE, &format!("/favorite/people/{han}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite person deleted.");

    let (_, body) = send(&app, Method::GET, "/users/favorites", None).await;
    assert_eq!(body["favorite_people"], json!([kept]));

    Ok(())
}

#[tokio::test]
async fn favorites_without_default_user_are_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let planet = create_planet(&state, "Hoth", "Ice").await?;
    let app = build_app(state);

    let (status, body) = send(&app, Method::GET, "/users/favorites", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, _) = send(&app, Method::POST, &format!("/favorite/planet/{planet}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn bearer_token_selects_the_subject() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_user(&state, "luke", true).await?;
    let leia = create_user(&state, "leia", true).await?;
    let planet = create_planet(&state, "Alderaan", "Peaceful").await?;
    let app = build_app(state);

    let (status, login) = post_json(
        &app,
        "/auth/login",
        json!({ "username": "leia", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["token_type"], "Bearer");
    let token = login["token"].as_str().unwrap().to_string();

    let (status, edge) = send(
        &app,
        Method::POST,
        &format!("/favorite/planet/{planet}"),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(edge["user_id"], leia);

    // The default subject did not gain the edge.
    let (_, body) = send(&app, Method::GET, "/users/favorites", None).await;
    assert_eq!(body["favorite_planet"], json!([]));

    let (status, body) = send(&app, Method::GET, "/users/favorites", Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");

    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials_and_inactive_users() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_user(&state, "luke", true).await?;
    create_user(&state, "ben", false).await?;
    let app = build_app(state);

    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({ "username": "luke", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid username or password");

    let (status, _) = post_json(
        &app,
        "/auth/login",
        json!({ "username": "ben", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn sitemap_and_unknown_routes() -> anyhow::Result<()> {
    let app = build_app(setup_state().await?);

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/people"));
    assert!(paths.contains(&"/favorite/planet/{id}"));

    let (status, body) = send(&app, Method::GET, "/starships", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No route for /starships");

    Ok(())
}

#[tokio::test]
async fn malformed_requests_get_json_errors() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_person(&state, "R2-D2", "Astromech").await?;
    let app = build_app(state);

    let (status, body) = send(&app, Method::GET, "/people?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("page"));

    let (status, body) = post_json(&app, "/auth/login", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("username"));

    let (status, body) = send(&app, Method::PUT, "/people/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body["message"].is_string());

    Ok(())
}

#[tokio::test]
async fn out_of_range_pages_are_empty_not_faults() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_planet(&state, "Kashyyyk", "Wookiee homeworld").await?;
    let app = build_app(state);

    let (status, body) = send(
        &app,
        Method::GET,
        "/planets?page=18446744073709551615&per_page=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}
