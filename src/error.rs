use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("No profile yet, onboarding has not been completed")]
    NotOnboarded,

    #[error("Period already logged for {0}")]
    PeriodAlreadyLogged(NaiveDate),

    #[error("Cycle length of {0} days is out of range")]
    InvalidCycleLength(i64),

    #[error("Please enter both weight and height")]
    MissingMeasurement,

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Stored value could not be decoded: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = match &self {
            TrackerError::NotOnboarded => StatusCode::NOT_FOUND,
            TrackerError::PeriodAlreadyLogged(_) => StatusCode::CONFLICT,
            TrackerError::InvalidCycleLength(_) | TrackerError::MissingMeasurement => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            TrackerError::Store(e) => {
                tracing::error!("❌ Store error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            TrackerError::Json(e) => {
                tracing::error!("❌ Corrupt stored value: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
