use std::collections::BTreeSet;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::today;
use crate::error::TrackerError;
use crate::models::DailyLog;
use crate::tracker::Tracker;

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct SaveDailyLog {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
    pub bbt: Option<f64>,
    #[serde(default)]
    pub cm: String,
    #[serde(default)]
    pub notes: String,
}

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/daily-log", get(get_daily_log).put(save_daily_log))
        .with_state(tracker)
}

async fn get_daily_log(
    State(tracker): State<Tracker>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DailyLog>, TrackerError> {
    let date = query.date.unwrap_or_else(today);
    Ok(Json(tracker.daily_log(date).await?))
}

async fn save_daily_log(
    State(tracker): State<Tracker>,
    Json(body): Json<SaveDailyLog>,
) -> Result<Json<DailyLog>, TrackerError> {
    let log = DailyLog {
        date: body.date.unwrap_or_else(today),
        symptoms: body.symptoms,
        bbt: body.bbt,
        cm: body.cm,
        notes: body.notes,
    };
    tracker.save_daily_log(&log).await?;
    Ok(Json(log))
}
