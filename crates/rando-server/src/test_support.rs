//! In-memory providers for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rando_core::elevation::ElevationSample;
use rando_core::{Coordinate, Waypoint};

use crate::elevation::{ElevationError, ElevationSource};
use crate::providers::{NativeGeometry, ProviderError, ProviderRoute, RouteProvider};

pub enum Behaviour {
    Fail,
    /// Route through the midpoint, geometry in `[lon, lat]` order.
    Echo { distance_m: f64, duration_s: f64 },
    /// Same as `Echo` but answering in `[lat, lon]` order.
    EchoLatLon { distance_m: f64, duration_s: f64 },
}

pub struct FakeProvider {
    name: &'static str,
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(name: &'static str, behaviour: Behaviour) -> Self {
        Self {
            name,
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn midpoint(a: Waypoint, b: Waypoint) -> Waypoint {
    Waypoint::new((a.lat + b.lat) / 2.0, (a.lon + b.lon) / 2.0)
}

#[async_trait]
impl RouteProvider for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn route_segment(&self, a: Waypoint, b: Waypoint) -> Result<ProviderRoute, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mid = midpoint(a, b);
        match self.behaviour {
            Behaviour::Fail => Err(ProviderError::NoRoute { provider: self.name }),
            Behaviour::Echo {
                distance_m,
                duration_s,
            } => ProviderRoute::checked(
                self.name,
                NativeGeometry::LonLat(vec![[a.lon, a.lat], [mid.lon, mid.lat], [b.lon, b.lat]]),
                distance_m,
                duration_s,
            ),
            Behaviour::EchoLatLon {
                distance_m,
                duration_s,
            } => ProviderRoute::checked(
                self.name,
                NativeGeometry::LatLon(vec![[a.lat, a.lon], [mid.lat, mid.lon], [b.lat, b.lon]]),
                distance_m,
                duration_s,
            ),
        }
    }
}

/// Elevation source returning a fixed profile, or failing.
pub struct FakeElevation {
    profile: Option<Vec<f64>>,
    requested: Mutex<Vec<Coordinate>>,
}

impl FakeElevation {
    pub fn profile(values: &[f64]) -> Self {
        Self {
            profile: Some(values.to_vec()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            profile: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<Coordinate> {
        self.requested.lock().expect("requested lock").clone()
    }
}

#[async_trait]
impl ElevationSource for FakeElevation {
    async fn elevations(&self, coords: &[Coordinate]) -> Result<Vec<ElevationSample>, ElevationError> {
        *self.requested.lock().expect("requested lock") = coords.to_vec();
        match &self.profile {
            Some(values) => Ok(values
                .iter()
                .enumerate()
                .map(|(index, elevation_m)| ElevationSample {
                    index,
                    elevation_m: *elevation_m,
                })
                .collect()),
            None => Err(ElevationError::Malformed("unavailable".to_string())),
        }
    }
}
