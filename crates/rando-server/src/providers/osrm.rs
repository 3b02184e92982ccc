//! OSRM HTTP client: the primary routing tier, plus the nearest and match
//! services used by point snapping and trace matching.

use async_trait::async_trait;
use rando_core::{Coordinate, Geometry, Waypoint};
use reqwest::Client;
use serde::Deserialize;

use super::{read_json, trim_base, NativeGeometry, ProviderError, ProviderRoute, RouteProvider};

const PROVIDER: &str = "osrm";

pub struct OsrmClient {
    client: Client,
    base_url: String,
    profile: String,
    match_profile: String,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct NearestResponse {
    #[serde(default)]
    waypoints: Vec<NearestWaypoint>,
}

#[derive(Debug, Deserialize)]
struct NearestWaypoint {
    location: Option<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(default)]
    matchings: Vec<Matching>,
}

#[derive(Debug, Deserialize)]
struct Matching {
    geometry: OsrmGeometry,
}

impl OsrmClient {
    pub fn new(
        client: Client,
        base_url: &str,
        profile: impl Into<String>,
        match_profile: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            profile: profile.into(),
            match_profile: match_profile.into(),
        }
    }

    /// Closest routable point to `point`, or `None` when OSRM finds nothing.
    pub async fn nearest(&self, point: Waypoint) -> Result<Option<Waypoint>, ProviderError> {
        let url = format!(
            "{}/nearest/v1/{}/{},{}?number=1",
            self.base_url, self.profile, point.lon, point.lat
        );
        let response = self.send(&url).await?;
        let body: NearestResponse = read_json(PROVIDER, response).await?;
        Ok(body
            .waypoints
            .into_iter()
            .next()
            .and_then(|wp| wp.location)
            .map(|[lon, lat]| Waypoint::new(lat, lon)))
    }

    /// Snap a recorded trace onto the road network as one line.
    pub async fn match_trace(&self, points: &[Waypoint]) -> Result<Option<Geometry>, ProviderError> {
        let coords = points
            .iter()
            .map(|wp| format!("{},{}", wp.lon, wp.lat))
            .collect::<Vec<_>>()
            .join(";");
        let url = format!(
            "{}/match/v1/{}/{}?geometries=geojson&overview=full&steps=false",
            self.base_url, self.match_profile, coords
        );
        let response = self.send(&url).await?;
        let body: MatchResponse = read_json(PROVIDER, response).await?;
        Ok(body.matchings.into_iter().next().map(|matching| {
            Geometry::line_string(
                matching
                    .geometry
                    .coordinates
                    .into_iter()
                    .map(Coordinate::from)
                    .collect(),
            )
        }))
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, ProviderError> {
        tracing::debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                source,
            })
    }
}

#[async_trait]
impl RouteProvider for OsrmClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn route_segment(&self, a: Waypoint, b: Waypoint) -> Result<ProviderRoute, ProviderError> {
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url, self.profile, a.lon, a.lat, b.lon, b.lat
        );
        let response = self.send(&url).await?;
        let body: RouteResponse = read_json(PROVIDER, response).await?;
        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or(ProviderError::NoRoute { provider: PROVIDER })?;

        ProviderRoute::checked(
            PROVIDER,
            NativeGeometry::LonLat(route.geometry.coordinates),
            route.distance.unwrap_or(0.0),
            route.duration.unwrap_or(0.0),
        )
    }
}
