//! HTTP client for the composition server.

use anyhow::{Context, Result};
use rando_core::{ComposeRouteRequest, ComposedRoute, Waypoint};
use serde_json::Value;

/// Client for a running `rando-server`.
pub struct RouteClient {
    base_url: String,
    client: reqwest::Client,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Compose a route through `points`. Returns the parsed route and the raw body.
    pub async fn compose(&self, points: &[Waypoint]) -> Result<(ComposedRoute, Value)> {
        let url = format!("{}/v1/route", self.base_url);
        let request = ComposeRouteRequest {
            points: points.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;

        let status = response.status();
        let body: Value = response.json().await.context("response is not JSON")?;
        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            anyhow::bail!("server returned {status}: {message}");
        }

        let route = serde_json::from_value(body.clone()).context("unexpected route payload")?;
        Ok((route, body))
    }
}
