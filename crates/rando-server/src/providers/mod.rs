//! Routing provider capability and its concrete clients.
//!
//! Every provider answers the same question (the best path between two
//! waypoints) and reports any problem as a [`ProviderError`]. The segment
//! router walks an ordered list of them.

pub mod graphhopper;
pub mod osrm;
pub mod polyline;

use async_trait::async_trait;
use rando_core::{Coordinate, Waypoint};
use reqwest::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use graphhopper::GraphHopperClient;
pub use osrm::OsrmClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("{provider} returned no usable route")]
    NoRoute { provider: &'static str },
    #[error("{provider} response could not be parsed: {reason}")]
    Malformed {
        provider: &'static str,
        reason: String,
    },
}

/// Path geometry in the axis order the provider speaks.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeGeometry {
    /// GeoJSON order, `[lon, lat]`.
    LonLat(Vec<[f64; 2]>),
    /// Encoded-polyline order, `[lat, lon]`.
    LatLon(Vec<[f64; 2]>),
}

impl NativeGeometry {
    pub fn len(&self) -> usize {
        match self {
            NativeGeometry::LonLat(points) | NativeGeometry::LatLon(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize to `[lon, lat]` coordinates.
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        match self {
            NativeGeometry::LonLat(points) => points
                .into_iter()
                .map(|[lon, lat]| Coordinate::new(lon, lat))
                .collect(),
            NativeGeometry::LatLon(points) => points
                .into_iter()
                .map(|[lat, lon]| Coordinate::new(lon, lat))
                .collect(),
        }
    }
}

/// One provider's answer for one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    pub geometry: NativeGeometry,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl ProviderRoute {
    /// Reject routes that cannot be stitched or summed.
    pub fn checked(
        provider: &'static str,
        geometry: NativeGeometry,
        distance_m: f64,
        duration_s: f64,
    ) -> Result<Self, ProviderError> {
        if geometry.len() < 2 {
            return Err(ProviderError::NoRoute { provider });
        }
        let valid = |value: f64| value.is_finite() && value >= 0.0;
        if !valid(distance_m) || !valid(duration_s) {
            return Err(ProviderError::Malformed {
                provider,
                reason: format!("invalid totals (distance {distance_m}, duration {duration_s})"),
            });
        }
        Ok(Self {
            geometry,
            distance_m,
            duration_s,
        })
    }
}

#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Short name used in logs and as the segment provenance tag.
    fn name(&self) -> &'static str;

    /// Route between two waypoints with a single request. No retries.
    async fn route_segment(&self, a: Waypoint, b: Waypoint) -> Result<ProviderRoute, ProviderError>;
}

/// Check the status, then parse the body as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    provider: &'static str,
    response: Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;
    if !status.is_success() {
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|err| ProviderError::Malformed {
        provider,
        reason: err.to_string(),
    })
}

pub(crate) fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_geometry_is_swapped() {
        let coords = NativeGeometry::LatLon(vec![[48.85, 2.35], [48.86, 2.36]]).into_coordinates();
        assert_eq!(coords, vec![Coordinate::new(2.35, 48.85), Coordinate::new(2.36, 48.86)]);
    }

    #[test]
    fn lon_lat_geometry_is_kept() {
        let coords = NativeGeometry::LonLat(vec![[2.35, 48.85]]).into_coordinates();
        assert_eq!(coords, vec![Coordinate::new(2.35, 48.85)]);
    }

    #[test]
    fn single_vertex_route_is_unusable() {
        let err = ProviderRoute::checked("osrm", NativeGeometry::LonLat(vec![[2.35, 48.85]]), 1.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, ProviderError::NoRoute { provider: "osrm" }));
    }

    #[test]
    fn negative_totals_are_malformed() {
        let geometry = NativeGeometry::LonLat(vec![[0.0, 0.0], [1.0, 1.0]]);
        let err = ProviderRoute::checked("osrm", geometry, -3.0, 1.0).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { .. }));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        assert_eq!(trim_base(" http://localhost:5000/ "), "http://localhost:5000");
    }
}
