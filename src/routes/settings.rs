use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::DarkMode;
use crate::tracker::Tracker;

#[derive(Serialize, Deserialize)]
pub struct DarkModeSetting {
    pub dark_mode: DarkMode,
}

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/settings/dark-mode", get(get_dark_mode).put(set_dark_mode))
        .route("/settings/dark-mode/toggle", post(toggle_dark_mode))
        .with_state(tracker)
}

async fn get_dark_mode(
    State(tracker): State<Tracker>,
) -> Result<Json<DarkModeSetting>, TrackerError> {
    let dark_mode = tracker.dark_mode().await?;
    Ok(Json(DarkModeSetting { dark_mode }))
}

async fn set_dark_mode(
    State(tracker): State<Tracker>,
    Json(body): Json<DarkModeSetting>,
) -> Result<Json<DarkModeSetting>, TrackerError> {
    let dark_mode = tracker.set_dark_mode(body.dark_mode).await?;
    Ok(Json(DarkModeSetting { dark_mode }))
}

async fn toggle_dark_mode(
    State(tracker): State<Tracker>,
) -> Result<Json<DarkModeSetting>, TrackerError> {
    let dark_mode = tracker.toggle_dark_mode().await?;
    Ok(Json(DarkModeSetting { dark_mode }))
}
