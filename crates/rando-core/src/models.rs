//! Wire models shared by the server and the CLI.
//!
//! Waypoints travel as `[lat, lon]` pairs (the order users click them on a
//! map), while every geometry travels as GeoJSON `[lon, lat]` pairs.

use serde::{Deserialize, Serialize};

/// A caller-supplied point the route must pass through, in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Waypoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Waypoint> for [f64; 2] {
    fn from(waypoint: Waypoint) -> Self {
        [waypoint.lat, waypoint.lon]
    }
}

/// One vertex of a path geometry, serialized in GeoJSON `[lon, lat]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lon, coord.lat]
    }
}

impl From<Waypoint> for Coordinate {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            lon: waypoint.lon,
            lat: waypoint.lat,
        }
    }
}

/// GeoJSON geometry. Only line strings are produced by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<Coordinate> },
}

impl Geometry {
    pub fn line_string(coordinates: Vec<Coordinate>) -> Self {
        Geometry::LineString { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::LineString { coordinates } => coordinates,
        }
    }
}

/// Which tier of the fallback chain produced a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentSource {
    /// A road-network-aware routing provider, by name.
    Provider { name: String },
    /// Synthesized from the two raw endpoints.
    StraightLine,
}

/// The routed path between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentResult {
    /// Path vertices in `[lon, lat]` order.
    pub coordinates: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: f64,
    pub source: SegmentSource,
}

/// Per-segment totals reported alongside the composed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub source: SegmentSource,
    #[serde(rename = "distance")]
    pub distance_m: f64,
    #[serde(rename = "duration")]
    pub duration_s: f64,
}

/// Body of `POST /v1/route`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposeRouteRequest {
    #[serde(default)]
    pub points: Vec<Waypoint>,
}

/// The stitched route with its aggregate trip statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedRoute {
    pub geometry: Geometry,
    /// Sum of segment distances, meters.
    #[serde(rename = "distance")]
    pub distance_m: f64,
    /// Sum of segment durations, seconds.
    #[serde(rename = "duration")]
    pub duration_s: f64,
    /// Cumulative ascent, meters. Zero when elevation lookup failed.
    #[serde(rename = "elevationGain")]
    pub elevation_gain_m: f64,
    /// Number of waypoints the caller submitted.
    pub points_count: usize,
    #[serde(default)]
    pub segments: Vec<SegmentSummary>,
}
