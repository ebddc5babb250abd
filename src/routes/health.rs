use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{json_or_not_found, today};
use crate::error::TrackerError;
use crate::models::WeightSample;
use crate::tracker::Tracker;

#[derive(Deserialize)]
pub struct NewWeight {
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/weight", post(save_weight))
        .route("/bmi", get(get_bmi))
        .with_state(tracker)
}

async fn save_weight(
    State(tracker): State<Tracker>,
    Json(body): Json<NewWeight>,
) -> Result<(StatusCode, Json<WeightSample>), TrackerError> {
    let sample = tracker.save_weight(body.weight, body.height, today()).await?;
    Ok((StatusCode::CREATED, Json(sample)))
}

async fn get_bmi(State(tracker): State<Tracker>) -> Result<Response, TrackerError> {
    Ok(json_or_not_found(tracker.bmi().await?))
}
