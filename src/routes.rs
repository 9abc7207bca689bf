use axum::Json;
use serde_json::{Value, json};

use crate::{game, models::TodayGame};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn today_game() -> Json<TodayGame> {
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    tracing::debug!(%today, "serving today's game");
    Json(game::todays_game(today))
}
