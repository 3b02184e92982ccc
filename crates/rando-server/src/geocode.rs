//! Place search passthrough to Nominatim.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::providers::trim_base;

/// Queries shorter than this never reach the provider.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("place search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("place search HTTP {status}")]
    Status { status: u16 },
    #[error("place search response could not be parsed: {0}")]
    Malformed(String),
}

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    /// South, north, west, east.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundingbox: Option<[f64; 4]>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Nominatim sends numbers as strings.
#[derive(Debug, Deserialize)]
struct RawPlace {
    display_name: String,
    lat: String,
    lon: String,
    boundingbox: Option<Vec<String>>,
    #[serde(rename = "type")]
    place_type: Option<String>,
    class: Option<String>,
}

impl RawPlace {
    fn normalize(self) -> Option<Place> {
        let lat = self.lat.trim().parse().ok()?;
        let lon = self.lon.trim().parse().ok()?;
        let boundingbox = self.boundingbox.and_then(|values| {
            let parsed: Vec<f64> = values
                .iter()
                .filter_map(|value| value.trim().parse().ok())
                .collect();
            <[f64; 4]>::try_from(parsed).ok()
        });
        Some(Place {
            display_name: self.display_name,
            lat,
            lon,
            boundingbox,
            place_type: self.place_type,
            class: self.class,
        })
    }
}

pub struct NominatimClient {
    client: Client,
    base_url: String,
    user_agent: String,
    accept_language: String,
}

impl NominatimClient {
    pub fn new(
        client: Client,
        base_url: &str,
        user_agent: impl Into<String>,
        accept_language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            user_agent: user_agent.into(),
            accept_language: accept_language.into(),
        }
    }

    /// Up to five places matching `query`. Short queries return nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let limit = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
                ("q", query),
            ])
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let raw: Vec<RawPlace> =
            serde_json::from_str(&body).map_err(|err| GeocodeError::Malformed(err.to_string()))?;
        Ok(raw
            .into_iter()
            .filter_map(RawPlace::normalize)
            .take(MAX_RESULTS)
            .collect())
    }
}
