//! Folding routed segments into one continuous path.

use crate::models::{ComposedRoute, Coordinate, Geometry, SegmentResult, SegmentSummary};

/// Running state of a composition: the stitched path so far and its totals.
///
/// Each call to [`RouteAccumulator::absorb`] consumes the state and returns
/// the next one, so segment order is the only thing that decides the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteAccumulator {
    coordinates: Vec<Coordinate>,
    distance_m: f64,
    duration_s: f64,
    segments: Vec<SegmentSummary>,
}

impl RouteAccumulator {
    /// Append one segment.
    ///
    /// The first segment is taken in full. Every later segment loses its first
    /// vertex, which duplicates the previous segment's last one, plus any
    /// further leading vertices still equal to the join point.
    pub fn absorb(mut self, segment: SegmentResult) -> Self {
        let SegmentResult {
            coordinates,
            distance_m,
            duration_s,
            source,
        } = segment;

        let join = self
            .coordinates
            .last()
            .copied()
            .filter(|_| !self.segments.is_empty());
        let incoming = coordinates
            .into_iter()
            .skip(usize::from(join.is_some()))
            .skip_while(|coord| Some(*coord) == join);
        self.coordinates.extend(incoming);
        self.distance_m += distance_m;
        self.duration_s += duration_s;
        self.segments.push(SegmentSummary {
            source,
            distance_m,
            duration_s,
        });
        self
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Close the fold into the final route.
    pub fn into_route(self, elevation_gain_m: f64, points_count: usize) -> ComposedRoute {
        ComposedRoute {
            geometry: Geometry::line_string(self.coordinates),
            distance_m: self.distance_m,
            duration_s: self.duration_s,
            elevation_gain_m,
            points_count,
            segments: self.segments,
        }
    }
}
