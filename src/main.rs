// src/main.rs
extern crate anyhow;
extern crate glance_rs;

use anyhow::Result;
use glance_rs::core::host::Host;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Build the host (loads config)
    let host = Host::new()?;
    // Serve the endpoint and run the refresh loop
    host.run()?;
    Ok(())
}
