//! Shared library surface for the route composition server and its tests.

pub mod api;
pub mod composer;
pub mod config;
pub mod elevation;
pub mod error;
pub mod geocode;
pub mod providers;
pub mod segment_router;
pub mod state;

#[cfg(test)]
mod test_support;
