use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Timelike;
use serde::Serialize;

use crate::error::TrackerError;
use crate::insights;
use crate::models::UserProfile;
use crate::tracker::Tracker;

#[derive(Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
    pub name: Option<String>,
    pub pcos_tip: &'static str,
}

pub fn routes(tracker: Tracker) -> Router {
    Router::new()
        .route("/profile", get(get_profile).post(onboard))
        .route("/greeting", get(get_greeting))
        .with_state(tracker)
}

async fn onboard(
    State(tracker): State<Tracker>,
    Json(profile): Json<UserProfile>,
) -> Result<(StatusCode, Json<UserProfile>), TrackerError> {
    tracker.onboard(&profile).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn get_profile(State(tracker): State<Tracker>) -> Result<Json<UserProfile>, TrackerError> {
    Ok(Json(tracker.profile().await?))
}

async fn get_greeting(State(tracker): State<Tracker>) -> Result<Json<Greeting>, TrackerError> {
    let now = chrono::Local::now();
    let name = match tracker.profile().await {
        Ok(profile) => Some(profile.name),
        Err(TrackerError::NotOnboarded) => None,
        Err(e) => return Err(e),
    };

    Ok(Json(Greeting {
        greeting: insights::greeting(now.hour()),
        name,
        pcos_tip: insights::pcos_tip(now.date_naive()),
    }))
}
