//! Shared, read-only service handles.
//!
//! Nothing here is mutated after start-up; every request owns its own
//! waypoints, segments and composed route.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::composer::RouteComposer;
use crate::config::Config;
use crate::elevation::OpenElevationClient;
use crate::geocode::NominatimClient;
use crate::providers::{GraphHopperClient, OsrmClient, RouteProvider};
use crate::segment_router::SegmentRouter;

pub struct AppState {
    config: Config,
    composer: RouteComposer,
    osrm: Arc<OsrmClient>,
    geocoder: NominatimClient,
}

impl AppState {
    /// Build every outbound client from configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.provider_timeout())
            .build()
            .context("failed to create HTTP client")?;

        let osrm = Arc::new(OsrmClient::new(
            client.clone(),
            &config.osrm_url,
            config.osrm_profile.clone(),
            config.match_profile.clone(),
        ));

        let mut providers: Vec<Arc<dyn RouteProvider>> = vec![osrm.clone()];
        if config.graphhopper_url.is_empty() {
            tracing::info!("Secondary routing provider disabled");
        } else {
            providers.push(Arc::new(GraphHopperClient::new(
                client.clone(),
                &config.graphhopper_url,
                config.graphhopper_profile.clone(),
                config.graphhopper_key.clone(),
            )));
        }

        let elevation = Arc::new(OpenElevationClient::new(
            client.clone(),
            &config.elevation_url,
            config.elevation_max_samples,
        ));
        let geocoder = NominatimClient::new(
            client,
            &config.nominatim_url,
            config.user_agent.clone(),
            config.accept_language.clone(),
        );

        let router = SegmentRouter::new(providers);
        tracing::info!("Routing fallback chain: {:?} -> straight line", router.provider_names());

        Ok(Self {
            config,
            composer: RouteComposer::new(router, elevation),
            osrm,
            geocoder,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn composer(&self) -> &RouteComposer {
        &self.composer
    }

    pub fn osrm(&self) -> &OsrmClient {
        &self.osrm
    }

    pub fn geocoder(&self) -> &NominatimClient {
        &self.geocoder
    }
}
