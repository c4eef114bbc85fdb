use axum::http::StatusCode;
use httpmock::prelude::*;
use server::upstream::PROBE_TIMEOUT;
use std::time::{Duration, Instant};

use crate::common::{get, test_app, test_app_at, UNREACHABLE_URL};

#[tokio::test]
async fn health_reports_reachable_upstream() {
    let (app, upstream) = test_app().await;
    let probe = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200);
        })
        .await;

    let (status, resp) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["parcel_service"], "reachable");
    assert!(resp["uptime_seconds"].as_u64().is_some());
    assert_eq!(resp["version"], env!("CARGO_PKG_VERSION"));
    probe.assert_async().await;
}

#[tokio::test]
async fn health_treats_any_upstream_status_as_reachable() {
    let (app, upstream) = test_app().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(503);
        })
        .await;

    let (status, resp) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["parcel_service"], "reachable");
}

#[tokio::test]
async fn health_stays_ok_when_upstream_is_down() {
    let app = test_app_at(UNREACHABLE_URL);

    let (status, resp) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["parcel_service"], "error: Parcel service is unreachable");
}

#[tokio::test]
async fn health_does_not_wait_on_a_stalled_upstream() {
    let (app, upstream) = test_app().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .delay(PROBE_TIMEOUT + Duration::from_secs(2));
        })
        .await;

    let started = Instant::now();
    let (status, resp) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["parcel_service"], "error: Parcel service timed out");
    assert!(started.elapsed() < PROBE_TIMEOUT + Duration::from_secs(1));
}

#[tokio::test]
async fn docs_are_not_served_by_default() {
    let (app, _upstream) = test_app().await;

    let (status, _) = get(&app, "/docs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
