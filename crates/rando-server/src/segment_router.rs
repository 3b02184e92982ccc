//! Routing of one waypoint pair through the provider fallback chain.

use std::sync::Arc;

use rando_core::geodesy::{distance_m, estimate_duration_s, WALKING_SPEED_MPS};
use rando_core::{Coordinate, SegmentResult, SegmentSource, Waypoint};

use crate::providers::RouteProvider;

/// Tries each provider in order; the straight line is the last resort.
pub struct SegmentRouter {
    providers: Vec<Arc<dyn RouteProvider>>,
}

impl SegmentRouter {
    pub fn new(providers: Vec<Arc<dyn RouteProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Route `a -> b`. Never fails.
    pub async fn route_segment(&self, a: Waypoint, b: Waypoint) -> SegmentResult {
        for provider in &self.providers {
            match provider.route_segment(a, b).await {
                Ok(route) => {
                    tracing::debug!(
                        provider = provider.name(),
                        "Segment routed: {:.0} m, {:.0} s",
                        route.distance_m,
                        route.duration_s
                    );
                    return SegmentResult {
                        coordinates: route.geometry.into_coordinates(),
                        distance_m: route.distance_m,
                        duration_s: route.duration_s,
                        source: SegmentSource::Provider {
                            name: provider.name().to_string(),
                        },
                    };
                }
                Err(err) => {
                    tracing::warn!(provider = provider.name(), "Routing provider failed: {}", err);
                }
            }
        }

        tracing::info!("No provider routed the segment, using a straight line");
        straight_line(a, b)
    }
}

/// Segment made of the two raw endpoints with estimated totals.
pub fn straight_line(a: Waypoint, b: Waypoint) -> SegmentResult {
    let distance = distance_m(a, b);
    SegmentResult {
        coordinates: vec![Coordinate::from(a), Coordinate::from(b)],
        distance_m: distance,
        duration_s: estimate_duration_s(distance, WALKING_SPEED_MPS),
        source: SegmentSource::StraightLine,
    }
}
