//! Rando CLI - command line tools for the route composition service.
//!
//! - compose_route: compose a walking route from waypoints and print a summary

pub mod client;
pub mod report;

pub use client::RouteClient;
