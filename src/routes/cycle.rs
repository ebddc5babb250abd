use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;

use super::{json_or_not_found, today};
use crate::error::TrackerError;
use crate::tracker::Tracker;

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/period", post(log_period))
        .route("/cycle", get(get_cycle_overview))
        .route("/fertility", get(get_fertility))
        .with_state(tracker)
}

async fn log_period(
    State(tracker): State<Tracker>,
) -> Result<(StatusCode, Json<Vec<NaiveDate>>), TrackerError> {
    let history = tracker.log_period_start(today()).await.map_err(|e| {
        if let TrackerError::PeriodAlreadyLogged(date) = &e {
            tracing::info!("ℹ️ Period already logged for {}", date);
        }
        e
    })?;
    Ok((StatusCode::CREATED, Json(history)))
}

async fn get_cycle_overview(State(tracker): State<Tracker>) -> Result<Response, TrackerError> {
    let overview = tracker.predictions(today()).await?;
    Ok(json_or_not_found(overview))
}

async fn get_fertility(State(tracker): State<Tracker>) -> Result<Response, TrackerError> {
    let fertility = tracker.fertility(today()).await?;
    Ok(json_or_not_found(fertility))
}
