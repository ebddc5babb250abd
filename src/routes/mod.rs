use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

pub mod analytics;
pub mod calendar;
pub mod cycle;
pub mod daily_log;
pub mod health;
pub mod profile;
pub mod settings;

pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().naive_utc().date()
}

/// 404 stands in for "nothing logged yet".
pub(crate) fn json_or_not_found<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
