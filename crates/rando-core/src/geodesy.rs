//! Great-circle distance and travel time estimation.

use crate::models::Waypoint;

/// Mean Earth radius used by the haversine formula, meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Estimation speed when no provider duration is available (~4.5 km/h).
pub const WALKING_SPEED_MPS: f64 = 1.25;

/// Haversine distance between two lat/lon points.
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two waypoints, meters.
pub fn distance_m(a: Waypoint, b: Waypoint) -> f64 {
    haversine_distance(a.lat, a.lon, b.lat, b.lon)
}

/// Travel time in seconds for `distance_m` at a constant positive speed.
pub fn estimate_duration_s(distance_m: f64, speed_mps: f64) -> f64 {
    distance_m / speed_mps
}
