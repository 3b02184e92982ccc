//! Route composition: route every waypoint pair in order, stitch the
//! segments, then derive elevation gain from the stitched path.

use std::sync::Arc;

use futures::{future, stream, StreamExt};
use rando_core::elevation::elevation_gain;
use rando_core::{validate_waypoints, ComposedRoute, RouteAccumulator, ValidationError, Waypoint};
use thiserror::Error;
use tracing::Instrument;

use crate::elevation::ElevationSource;
use crate::segment_router::SegmentRouter;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Internal(String),
}

pub struct RouteComposer {
    router: SegmentRouter,
    elevation: Arc<dyn ElevationSource>,
}

impl RouteComposer {
    pub fn new(router: SegmentRouter, elevation: Arc<dyn ElevationSource>) -> Self {
        Self { router, elevation }
    }

    pub fn router(&self) -> &SegmentRouter {
        &self.router
    }

    pub async fn compose(&self, waypoints: &[Waypoint]) -> Result<ComposedRoute, ComposeError> {
        validate_waypoints(waypoints)?;

        // Segments run in order; each join needs the previous segment's end.
        let router = &self.router;
        let stitched = stream::iter(waypoints.windows(2).enumerate())
            .then(move |(index, pair)| {
                router
                    .route_segment(pair[0], pair[1])
                    .instrument(tracing::info_span!("segment", index))
            })
            .fold(RouteAccumulator::default(), |acc, segment| {
                future::ready(acc.absorb(segment))
            })
            .await;

        if stitched.coordinates().len() < 2 {
            return Err(ComposeError::Internal(format!(
                "stitched route has {} coordinates",
                stitched.coordinates().len()
            )));
        }

        let gain = match self.elevation.elevations(stitched.coordinates()).await {
            Ok(samples) => elevation_gain(&samples),
            Err(err) => {
                tracing::warn!("Elevation lookup failed, reporting zero gain: {}", err);
                0.0
            }
        };

        tracing::info!(
            "Composed route: {} segments, {} coordinates, {:.0} m, {:.0} s, +{:.0} m",
            stitched.segment_count(),
            stitched.coordinates().len(),
            stitched.distance_m(),
            stitched.duration_s(),
            gain
        );

        Ok(stitched.into_route(gain, waypoints.len()))
    }
}
