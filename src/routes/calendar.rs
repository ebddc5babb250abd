use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use serde::Deserialize;

use super::today;
use crate::calendar::Calendar;
use crate::error::TrackerError;
use crate::tracker::Tracker;

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/calendar", get(get_calendar))
        .with_state(tracker)
}

async fn get_calendar(
    State(tracker): State<Tracker>,
    Query(query): Query<MonthQuery>,
) -> Result<Response, TrackerError> {
    let today = today();
    let Some(calendar) = Calendar::new(
        query.year.unwrap_or(today.year()),
        query.month.unwrap_or(today.month()),
    ) else {
        return Ok((StatusCode::BAD_REQUEST, "Invalid month").into_response());
    };

    let month = tracker.calendar(calendar, today).await?;
    Ok(Json(month).into_response())
}
