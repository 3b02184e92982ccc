//! REST API routes.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rando_core::{ComposeRouteRequest, ComposedRoute, Geometry, Waypoint};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;
use crate::geocode::{GeocodeError, Place};
use crate::providers::ProviderError;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/route", post(compose_route))
        .route("/v1/geocode", get(geocode))
        .route("/v1/snap", post(snap))
        .route("/v1/mapmatch", post(map_match))
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<Place>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapRequest {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapResponse {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MapMatchRequest {
    #[serde(default)]
    pub points: Vec<Waypoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MapMatchResponse {
    pub geometry: Geometry,
}

// === Handlers ===

async fn compose_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ComposeRouteRequest>, JsonRejection>,
) -> Result<Json<ComposedRoute>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let deadline = state.config().compose_timeout();
    let route = tokio::time::timeout(deadline, state.composer().compose(&request.points))
        .await
        .map_err(|_| AppError::Timeout("route composition timed out".to_string()))??;

    Ok(Json(route))
}

async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GeocodeQuery>,
) -> (StatusCode, Json<GeocodeResponse>) {
    let q = query.q.unwrap_or_default();
    match state.geocoder().search(&q).await {
        Ok(results) => (StatusCode::OK, Json(GeocodeResponse { results })),
        Err(GeocodeError::Status { status }) => {
            tracing::warn!("Place search returned HTTP {}", status);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(GeocodeResponse { results: Vec::new() }))
        }
        Err(err) => {
            tracing::warn!("Place search failed: {}", err);
            (StatusCode::OK, Json(GeocodeResponse { results: Vec::new() }))
        }
    }
}

async fn snap(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SnapRequest>, JsonRejection>,
) -> Result<Json<SnapResponse>, AppError> {
    let Json(request) = payload
        .map_err(|_| AppError::Validation("lat and lon (numbers) are required".to_string()))?;

    let snapped = state
        .osrm()
        .nearest(Waypoint::new(request.lat, request.lon))
        .await
        .map_err(passthrough_error)?
        .ok_or_else(|| AppError::Unprocessable("No snap found".to_string()))?;

    Ok(Json(SnapResponse {
        lat: snapped.lat,
        lon: snapped.lon,
    }))
}

async fn map_match(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MapMatchRequest>, JsonRejection>,
) -> Result<Json<MapMatchResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    if request.points.len() < 2 {
        return Err(AppError::Validation(
            "at least two points are required".to_string(),
        ));
    }

    let geometry = state
        .osrm()
        .match_trace(&request.points)
        .await
        .map_err(passthrough_error)?
        .ok_or_else(|| AppError::Unprocessable("No matching route found".to_string()))?;

    Ok(Json(MapMatchResponse { geometry }))
}

/// Provider statuses pass through with the provider's body as the message.
fn passthrough_error(err: ProviderError) -> AppError {
    match err {
        ProviderError::Status { status, body, .. } => AppError::Upstream {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message: body,
        },
        other => AppError::Internal(other.to_string()),
    }
}
