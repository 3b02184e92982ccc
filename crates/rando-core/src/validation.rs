//! Caller input checks run before any provider is contacted.

use crate::models::Waypoint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("at least two waypoints required")]
    TooFewWaypoints,
    #[error("waypoint {index} is out of range (lat {lat}, lon {lon})")]
    OutOfRange { index: usize, lat: f64, lon: f64 },
}

/// Require at least two waypoints with finite, in-range WGS84 coordinates.
pub fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), ValidationError> {
    if waypoints.len() < 2 {
        return Err(ValidationError::TooFewWaypoints);
    }
    for (index, wp) in waypoints.iter().enumerate() {
        let lat_ok = wp.lat.is_finite() && (-90.0..=90.0).contains(&wp.lat);
        let lon_ok = wp.lon.is_finite() && (-180.0..=180.0).contains(&wp.lon);
        if !lat_ok || !lon_ok {
            return Err(ValidationError::OutOfRange {
                index,
                lat: wp.lat,
                lon: wp.lon,
            });
        }
    }
    Ok(())
}
