pub mod analytics;
pub mod calendar;
pub mod charts;
pub mod config;
pub mod error;
pub mod health;
pub mod insights;
pub mod models;
pub mod predictor;
pub mod routes;
pub mod store;
pub mod tracker;

use axum::{routing::get, Router};

use crate::tracker::Tracker;

pub fn app(tracker: Tracker) -> Router {
    Router::new()
        .merge(routes::profile::routes(tracker.clone()))
        .merge(routes::cycle::routes(tracker.clone()))
        .merge(routes::daily_log::routes(tracker.clone()))
        .merge(routes::analytics::routes(tracker.clone()))
        .merge(routes::health::routes(tracker.clone()))
        .merge(routes::calendar::routes(tracker.clone()))
        .merge(routes::settings::routes(tracker))
        .route("/health", get(|| async { "✅ Tracker up" }))
}
