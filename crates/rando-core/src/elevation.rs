//! Elevation sampling and ascent summation.

use crate::models::Coordinate;
use serde::{Deserialize, Serialize};

/// Default upper bound on points sent to the elevation provider.
pub const DEFAULT_MAX_SAMPLES: usize = 150;

/// Elevation of one stitched coordinate, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub index: usize,
    pub elevation_m: f64,
}

/// Stride between sampled coordinates: `max(1, floor(len / max_samples))`.
///
/// Floor division can overshoot the budget by up to `max_samples - 1` picks
/// (299 coordinates are all sampled); the budget bounds the stride, not the
/// exact request size.
pub fn sample_stride(len: usize, max_samples: usize) -> usize {
    (len / max_samples.max(1)).max(1)
}

/// Every stride-th coordinate starting at index 0, with its index.
pub fn downsample(coords: &[Coordinate], max_samples: usize) -> Vec<(usize, Coordinate)> {
    let stride = sample_stride(coords.len(), max_samples);
    coords.iter().copied().enumerate().step_by(stride).collect()
}

/// Sum of positive consecutive deltas. Descents contribute nothing.
pub fn elevation_gain(samples: &[ElevationSample]) -> f64 {
    samples
        .windows(2)
        .map(|pair| pair[1].elevation_m - pair[0].elevation_m)
        .filter(|delta| *delta > 0.0)
        .sum()
}
