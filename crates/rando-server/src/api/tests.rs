use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

/// Nothing listens on port 1: every provider call fails fast.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn setup_app() -> axum::Router {
    let config = Config {
        osrm_url: UNREACHABLE.to_string(),
        graphhopper_url: UNREACHABLE.to_string(),
        elevation_url: UNREACHABLE.to_string(),
        nominatim_url: UNREACHABLE.to_string(),
        provider_timeout_s: 2,
        ..Config::default()
    };
    let state = Arc::new(AppState::from_config(config).expect("build state"));
    api::app(state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_echoes_request_id() {
    let app = setup_app();

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "trace-me");

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn compose_with_all_providers_down_returns_straight_line() {
    let app = setup_app();

    let res = app
        .oneshot(post_json(
            "/v1/route",
            json!({ "points": [[48.85, 2.35], [48.86, 2.36]] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["geometry"]["type"], "LineString");
    assert_eq!(
        body["geometry"]["coordinates"],
        json!([[2.35, 48.85], [2.36, 48.86]])
    );
    let distance = body["distance"].as_f64().unwrap();
    let duration = body["duration"].as_f64().unwrap();
    assert!((distance - 1331.06).abs() < 0.5, "distance {distance}");
    assert!((duration - distance / 1.25).abs() < 1e-6);
    assert_eq!(body["elevationGain"], json!(0.0));
    assert_eq!(body["pointsCount"], json!(2));
    assert_eq!(body["segments"][0]["source"]["kind"], "straight_line");
}

#[tokio::test]
async fn compose_rejects_short_waypoint_lists() {
    let app = setup_app();

    for body in [
        json!({ "points": [[48.85, 2.35]] }),
        json!({ "points": [] }),
        json!({}),
    ] {
        let res = app.clone().oneshot(post_json("/v1/route", body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body["error"], "at least two waypoints required");
    }
}

#[tokio::test]
async fn compose_rejects_unreadable_body() {
    let app = setup_app();

    let req = Request::builder()
        .method("POST")
        .uri("/v1/route")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(res).await["error"].is_string());
}

#[tokio::test]
async fn compose_rejects_out_of_range_waypoints() {
    let app = setup_app();

    let res = app
        .oneshot(post_json(
            "/v1/route",
            json!({ "points": [[48.85, 2.35], [123.0, 2.36]] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn short_geocode_query_is_empty_without_provider() {
    let app = setup_app();

    for uri in ["/v1/geocode?q=a", "/v1/geocode", "/v1/geocode?q=%20%20"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(read_json(res).await, json!({ "results": [] }));
    }
}

#[tokio::test]
async fn geocode_transport_failure_is_empty_ok() {
    let app = setup_app();

    let req = Request::builder()
        .uri("/v1/geocode?q=Chamonix")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await, json!({ "results": [] }));
}

#[tokio::test]
async fn snap_requires_numeric_lat_lon() {
    let app = setup_app();

    let res = app
        .oneshot(post_json("/v1/snap", json!({ "lat": "north", "lon": 2.35 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(res).await["error"],
        "lat and lon (numbers) are required"
    );
}

#[tokio::test]
async fn snap_transport_failure_is_server_error() {
    let app = setup_app();

    let res = app
        .oneshot(post_json("/v1/snap", json!({ "lat": 48.85, "lon": 2.35 })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(read_json(res).await["error"].is_string());
}

#[tokio::test]
async fn map_match_requires_two_points() {
    let app = setup_app();

    let res = app
        .oneshot(post_json("/v1/mapmatch", json!({ "points": [[48.85, 2.35]] })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(res).await["error"],
        "at least two points are required"
    );
}
