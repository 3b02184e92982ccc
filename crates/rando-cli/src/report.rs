//! Argument parsing and human-readable summaries.

use anyhow::{bail, Context, Result};
use rando_core::{ComposedRoute, SegmentSource, Waypoint};

/// Parse a `lat,lon` pair.
pub fn parse_point(raw: &str) -> Result<Waypoint> {
    let Some((lat, lon)) = raw.split_once(',') else {
        bail!("expected lat,lon but got {raw:?}");
    };
    let lat: f64 = lat.trim().parse().with_context(|| format!("bad latitude in {raw:?}"))?;
    let lon: f64 = lon.trim().parse().with_context(|| format!("bad longitude in {raw:?}"))?;
    Ok(Waypoint::new(lat, lon))
}

/// `h:mm`, rounded to the nearest minute.
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0).round() as u64;
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

pub fn describe_source(source: &SegmentSource) -> &str {
    match source {
        SegmentSource::Provider { name } => name,
        SegmentSource::StraightLine => "straight line",
    }
}

pub fn summary(route: &ComposedRoute) -> String {
    let mut lines = vec![
        format!("Distance:       {:.2} km", route.distance_m / 1000.0),
        format!("Duration:       {}", format_duration(route.duration_s)),
        format!("Elevation gain: {:.0} m", route.elevation_gain_m),
        format!(
            "Coordinates:    {} ({} waypoints)",
            route.geometry.coordinates().len(),
            route.points_count
        ),
    ];
    for (index, segment) in route.segments.iter().enumerate() {
        lines.push(format!(
            "  segment {:>2}: {:<13} {:>8.0} m",
            index + 1,
            describe_source(&segment.source),
            segment.distance_m
        ));
    }
    lines.join("\n")
}
