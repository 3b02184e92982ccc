//! Server configuration from environment.

use std::env;
use std::time::Duration;

use rando_core::elevation::DEFAULT_MAX_SAMPLES;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Primary routing service; also answers nearest and match queries.
    pub osrm_url: String,
    pub osrm_profile: String,
    pub match_profile: String,
    /// Secondary routing service. Empty disables that fallback tier.
    pub graphhopper_url: String,
    pub graphhopper_profile: String,
    pub graphhopper_key: Option<String>,
    pub elevation_url: String,
    pub elevation_max_samples: usize,
    pub nominatim_url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub provider_timeout_s: u64,
    pub compose_timeout_s: u64,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            osrm_url: "https://router.project-osrm.org".to_string(),
            osrm_profile: "walking".to_string(),
            match_profile: "foot".to_string(),
            graphhopper_url: "https://graphhopper.com/api/1".to_string(),
            graphhopper_profile: "foot".to_string(),
            graphhopper_key: None,
            elevation_url: "https://api.open-elevation.com".to_string(),
            elevation_max_samples: DEFAULT_MAX_SAMPLES,
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "OpenRando/0.1 (https://github.com/IchikyOtsu/OpenRando)".to_string(),
            accept_language: "fr".to_string(),
            provider_timeout_s: 10,
            compose_timeout_s: 60,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_env("RANDO_PORT").unwrap_or(defaults.server_port),
            osrm_url: string_env("RANDO_OSRM_URL").unwrap_or(defaults.osrm_url),
            osrm_profile: string_env("RANDO_OSRM_PROFILE").unwrap_or(defaults.osrm_profile),
            match_profile: string_env("RANDO_MATCH_PROFILE").unwrap_or(defaults.match_profile),
            // Set-but-empty is meaningful here: it turns the tier off.
            graphhopper_url: env::var("RANDO_GRAPHHOPPER_URL")
                .map(|value| value.trim().to_string())
                .unwrap_or(defaults.graphhopper_url),
            graphhopper_profile: string_env("RANDO_GRAPHHOPPER_PROFILE")
                .unwrap_or(defaults.graphhopper_profile),
            graphhopper_key: string_env("RANDO_GRAPHHOPPER_KEY"),
            elevation_url: string_env("RANDO_ELEVATION_URL").unwrap_or(defaults.elevation_url),
            elevation_max_samples: parse_env::<usize>("RANDO_ELEVATION_MAX_SAMPLES")
                .unwrap_or(defaults.elevation_max_samples)
                .max(1),
            nominatim_url: string_env("RANDO_NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            user_agent: string_env("RANDO_USER_AGENT").unwrap_or(defaults.user_agent),
            accept_language: string_env("RANDO_ACCEPT_LANGUAGE")
                .unwrap_or(defaults.accept_language),
            provider_timeout_s: parse_env::<u64>("RANDO_PROVIDER_TIMEOUT_S")
                .unwrap_or(defaults.provider_timeout_s)
                .max(1),
            compose_timeout_s: parse_env::<u64>("RANDO_COMPOSE_TIMEOUT_S")
                .unwrap_or(defaults.compose_timeout_s)
                .max(1),
            log_json: parse_env("RANDO_LOG_JSON").unwrap_or(defaults.log_json),
        }
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_s.max(1))
    }

    pub fn compose_timeout(&self) -> Duration {
        Duration::from_secs(self.compose_timeout_s.max(1))
    }
}

fn string_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    string_env(key).and_then(|value| value.parse().ok())
}
