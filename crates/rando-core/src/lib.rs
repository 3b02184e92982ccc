//! OpenRando core - route composition logic without I/O.
//!
//! Holds the wire models shared by the server and the CLI, great-circle
//! geodesy, the segment stitching fold and elevation gain summation.

pub mod elevation;
pub mod geodesy;
pub mod models;
pub mod stitch;
pub mod validation;

pub use elevation::{downsample, elevation_gain, sample_stride, ElevationSample};
pub use geodesy::{distance_m, estimate_duration_s, haversine_distance, WALKING_SPEED_MPS};
pub use models::{
    ComposeRouteRequest, ComposedRoute, Coordinate, Geometry, SegmentResult, SegmentSource,
    SegmentSummary, Waypoint,
};
pub use stitch::RouteAccumulator;
pub use validation::{validate_waypoints, ValidationError};
