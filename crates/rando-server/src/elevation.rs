//! Elevation lookup for a stitched route.
//!
//! The route is thinned to the configured sample budget and sent to the
//! provider in one request. Any failure fails the whole lookup.

use async_trait::async_trait;
use rando_core::elevation::{downsample, ElevationSample};
use rando_core::Coordinate;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::providers::trim_base;

#[derive(Debug, Error)]
pub enum ElevationError {
    #[error("elevation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("elevation provider HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("elevation response could not be parsed: {0}")]
    Malformed(String),
    #[error("elevation provider returned {got} samples, expected {expected}")]
    SampleCount { expected: usize, got: usize },
}

#[async_trait]
pub trait ElevationSource: Send + Sync {
    /// Elevations for a thinned subsequence of `coords`, in order.
    async fn elevations(&self, coords: &[Coordinate]) -> Result<Vec<ElevationSample>, ElevationError>;
}

/// Client for the Open-Elevation lookup API.
pub struct OpenElevationClient {
    client: Client,
    base_url: String,
    max_samples: usize,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

impl OpenElevationClient {
    pub fn new(client: Client, base_url: &str, max_samples: usize) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            max_samples: max_samples.max(1),
        }
    }
}

#[async_trait]
impl ElevationSource for OpenElevationClient {
    async fn elevations(&self, coords: &[Coordinate]) -> Result<Vec<ElevationSample>, ElevationError> {
        let picked = downsample(coords, self.max_samples);
        if picked.is_empty() {
            return Ok(Vec::new());
        }

        let locations = join_locations(picked.iter().map(|(_, coord)| coord));
        let url = format!("{}/api/v1/lookup?locations={}", self.base_url, locations);
        tracing::debug!(
            "Elevation lookup for {} of {} coordinates",
            picked.len(),
            coords.len()
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ElevationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: LookupResponse =
            serde_json::from_str(&body).map_err(|err| ElevationError::Malformed(err.to_string()))?;
        if payload.results.len() != picked.len() {
            return Err(ElevationError::SampleCount {
                expected: picked.len(),
                got: payload.results.len(),
            });
        }

        Ok(picked
            .iter()
            .zip(payload.results)
            .map(|((index, _), result)| ElevationSample {
                index: *index,
                elevation_m: result.elevation,
            })
            .collect())
    }
}

/// `lat,lon|lat,lon|...` as the lookup endpoint expects.
fn join_locations<'a>(coords: impl Iterator<Item = &'a Coordinate>) -> String {
    let mut buf = String::new();
    for (idx, coord) in coords.enumerate() {
        if idx > 0 {
            buf.push('|');
        }
        buf.push_str(&format!("{:.6},{:.6}", coord.lat, coord.lon));
    }
    buf
}
