//! Compose a walking route through a list of waypoints.
//!
//! Usage:
//!   cargo run -p rando-cli --bin compose_route -- \
//!     --point 45.9237,6.8694 --point 45.9311,6.8890

use anyhow::{Context, Result};
use clap::Parser;
use rando_cli::{report, RouteClient};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compose a walking route through waypoints")]
struct Args {
    /// Composition server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Waypoint as lat,lon (repeat, in visiting order)
    #[arg(long = "point", value_parser = report::parse_point, required = true)]
    points: Vec<rando_core::Waypoint>,

    /// Write the raw JSON response to this file
    #[arg(long)]
    output: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = RouteClient::new(args.url);

    println!("Composing route through {} waypoints...", args.points.len());
    let (route, raw) = client.compose(&args.points).await?;
    println!("{}", report::summary(&route));

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&raw)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved response to {}", path.display());
    }

    Ok(())
}
