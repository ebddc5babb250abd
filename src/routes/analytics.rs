use axum::{extract::State, response::Response, routing::get, Json, Router};

use super::json_or_not_found;
use crate::analytics::AnalyticsSummary;
use crate::error::TrackerError;
use crate::tracker::Tracker;

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/analytics", get(get_analytics))
        .route("/charts/bbt", get(get_bbt_chart))
        .route("/charts/symptoms", get(get_symptom_chart))
        .route("/charts/weight", get(get_weight_chart))
        .with_state(tracker)
}

async fn get_analytics(
    State(tracker): State<Tracker>,
) -> Result<Json<AnalyticsSummary>, TrackerError> {
    Ok(Json(tracker.analytics().await?))
}

async fn get_bbt_chart(State(tracker): State<Tracker>) -> Result<Response, TrackerError> {
    Ok(json_or_not_found(tracker.bbt_chart().await?))
}

async fn get_symptom_chart(State(tracker): State<Tracker>) -> Result<Response, TrackerError> {
    Ok(json_or_not_found(tracker.symptom_chart().await?))
}

async fn get_weight_chart(State(tracker): State<Tracker>) -> Result<Response, TrackerError> {
    Ok(json_or_not_found(tracker.weight_chart().await?))
}
