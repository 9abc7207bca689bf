use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use cinemathisweek::{
    AppState,
    config::{Config, DbConfig},
    create_app,
    db::Db,
};
use serde_json::Value;
use tower::ServiceExt;

// Points at a port nothing listens on; the pool is lazy so the app still
// starts.
async fn app_without_database() -> axum::Router {
    let db_config = DbConfig {
        user: "game".to_string(),
        password: "unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: Some(1),
        dbname: "cinema".to_string(),
    };
    let db = Db::connect(&db_config).await.unwrap();
    let config = Config { addr: "127.0.0.1:0".parse().unwrap(), db: db_config };

    create_app(Arc::new(AppState { config: Arc::new(config), db }))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_is_ok_without_database() {
    let (status, json) = get_json(app_without_database().await, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn today_game_returns_fixture() {
    let before: jiff::civil::Date = jiff::Zoned::now().into();
    let (status, json) = get_json(app_without_database().await, "/today-game").await;
    let after: jiff::civil::Date = jiff::Zoned::now().into();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["movie_slug"], "daily-movie-stub");
    assert_eq!(json["total_clues"], 4);
    assert_eq!(json["first_clue"]["order_index"], 1);
    assert_eq!(
        json["first_clue"]["text"],
        "A quiet coastal town is disrupted by an unusual threat."
    );

    let game_date = json["game_date"].as_str().unwrap();
    assert!(
        game_date == before.to_string() || game_date == after.to_string(),
        "unexpected game_date {game_date}"
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = app_without_database().await;
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
