//! GraphHopper HTTP client, the secondary routing tier.
//!
//! GraphHopper names its profiles differently from OSRM ("foot" rather than
//! "walking"), reports time in milliseconds and returns an encoded polyline.

use async_trait::async_trait;
use rando_core::Waypoint;
use reqwest::Client;
use serde::Deserialize;

use super::polyline;
use super::{read_json, trim_base, NativeGeometry, ProviderError, ProviderRoute, RouteProvider};

const PROVIDER: &str = "graphhopper";
const POLYLINE_PRECISION: u32 = 5;

pub struct GraphHopperClient {
    client: Client,
    base_url: String,
    profile: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    paths: Vec<Path>,
}

#[derive(Debug, Deserialize)]
struct Path {
    distance: f64,
    /// Milliseconds.
    time: f64,
    points: String,
}

impl GraphHopperClient {
    pub fn new(
        client: Client,
        base_url: &str,
        profile: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            profile: profile.into(),
            api_key,
        }
    }
}

#[async_trait]
impl RouteProvider for GraphHopperClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn route_segment(&self, a: Waypoint, b: Waypoint) -> Result<ProviderRoute, ProviderError> {
        let mut query: Vec<(&str, String)> = vec![
            ("point", format!("{},{}", a.lat, a.lon)),
            ("point", format!("{},{}", b.lat, b.lon)),
            ("profile", self.profile.clone()),
            ("points_encoded", "true".to_string()),
            ("instructions", "false".to_string()),
        ];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("key", key.to_string()));
        }

        let url = format!("{}/route", self.base_url);
        tracing::debug!("GET {} profile={}", url, self.profile);
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                source,
            })?;
        let body: RouteResponse = read_json(PROVIDER, response).await?;
        let path = body
            .paths
            .into_iter()
            .next()
            .ok_or(ProviderError::NoRoute { provider: PROVIDER })?;

        let points = polyline::decode(&path.points, POLYLINE_PRECISION).map_err(|err| {
            ProviderError::Malformed {
                provider: PROVIDER,
                reason: err.to_string(),
            }
        })?;

        ProviderRoute::checked(
            PROVIDER,
            NativeGeometry::LatLon(points),
            path.distance,
            path.time / 1000.0,
        )
    }
}
