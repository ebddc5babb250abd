//! Drives the HTTP router against an in-memory store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Datelike, Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use cycle_tracker::{store::Store, tracker::Tracker};

async fn app() -> Router {
    let store = Store::in_memory().await.unwrap();
    cycle_tracker::app(Tracker::new(store))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn today() -> chrono::NaiveDate {
    Utc::now().naive_utc().date()
}

fn onboarding(last_period: chrono::NaiveDate) -> Value {
    json!({
        "name": "Ada",
        "lastPeriod": last_period.to_string(),
        "cycleLength": 28,
        "periodLength": 5,
        "flowLevel": "medium",
        "hasPCOS": true
    })
}

#[tokio::test]
async fn health_check() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_store_answers_not_found() {
    let app = app().await;
    for uri in ["/cycle", "/fertility", "/profile", "/bmi", "/charts/bbt", "/charts/symptoms"] {
        let (status, _) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn onboarding_then_cycle_overview() {
    let app = app().await;
    let last_period = today() - Duration::days(4);

    let (status, _) = send(&app, "POST", "/profile", Some(onboarding(last_period))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, cycle) = send(&app, "GET", "/cycle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cycle["cycle_day"], 5);
    assert_eq!(cycle["phase"], "Menstrual");
    assert_eq!(cycle["average_cycle_length"], 28);
    assert_eq!(cycle["days_until_next_period"], 24);

    let (status, fertility) = send(&app, "GET", "/fertility", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fertility["status"], "Low");
}

#[tokio::test]
async fn period_can_only_be_logged_once_a_day() {
    let app = app().await;
    send(&app, "POST", "/profile", Some(onboarding(today() - Duration::days(30)))).await;

    let (status, history) = send(&app, "POST", "/period", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(history.as_array().unwrap().len(), 2);

    let (status, _) = send(&app, "POST", "/period", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, analytics) = send(&app, "GET", "/analytics", None).await;
    assert_eq!(analytics["average_cycle_length"], 30);
}

#[tokio::test]
async fn daily_log_feeds_charts() {
    let app = app().await;
    send(&app, "POST", "/profile", Some(onboarding(today()))).await;

    let body = json!({
        "date": today().to_string(),
        "symptoms": ["cramps", "headache"],
        "bbt": 36.4,
        "cm": "sticky",
        "notes": ""
    });
    let (status, _) = send(&app, "PUT", "/daily-log", Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, log) = send(&app, "GET", "/daily-log", None).await;
    assert_eq!(log["cm"], "sticky");

    let (status, bbt) = send(&app, "GET", "/charts/bbt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bbt[0]["label"], "Day 1");

    let (_, symptoms) = send(&app, "GET", "/charts/symptoms", None).await;
    assert_eq!(symptoms.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn weight_requires_height() {
    let app = app().await;
    let (status, _) = send(&app, "POST", "/weight", Some(json!({ "weight": 60.0 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body = json!({ "weight": 60.0, "height": 165.0 });
    let (status, _) = send(&app, "POST", "/weight", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, bmi) = send(&app, "GET", "/bmi", None).await;
    assert_eq!(bmi["category"], "Normal");
}

#[tokio::test]
async fn calendar_and_dark_mode() {
    let app = app().await;
    let (status, month) = send(&app, "GET", "/calendar?year=2024&month=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(month["title"], "March 2024");
    assert_eq!(month["days"].as_array().unwrap().len(), 42);
    assert_eq!(month["previous"]["month"], 2);

    let (status, _) = send(&app, "GET", "/calendar?year=2024&month=13", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, mode) = send(&app, "POST", "/settings/dark-mode/toggle", None).await;
    assert_eq!(mode["dark_mode"], "enabled");
    let (_, mode) = send(&app, "GET", "/settings/dark-mode", None).await;
    assert_eq!(mode["dark_mode"], "enabled");
}

#[tokio::test]
async fn oversized_cycle_length_is_refused_at_onboarding() {
    let app = app().await;
    let mut body = onboarding(today());
    body["cycleLength"] = json!(100_000_000);

    let (status, _) = send(&app, "POST", "/profile", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "GET", "/cycle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn null_cycle_length_uses_the_default() {
    let app = app().await;
    let mut body = onboarding(today());
    body["cycleLength"] = Value::Null;
    body["periodLength"] = Value::Null;

    let (status, _) = send(&app, "POST", "/profile", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, cycle) = send(&app, "GET", "/cycle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cycle["average_cycle_length"], 28);
}

#[tokio::test]
async fn calendar_at_the_end_of_time_is_a_bad_request() {
    let app = app().await;
    let uri = format!("/calendar?year={}&month=12", chrono::NaiveDate::MAX.year());
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
