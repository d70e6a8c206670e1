// src/core/endpoint.rs

use super::bridge::UpdateBridge;
use anyhow::{Context, Result};
use tracing::info;
use zbus::blocking::Connection;
use zbus::blocking::connection::Builder;

/// Session-bus constants for the update endpoint
const BUS_NAME: &str = "dev.glance.Glance";
const OBJECT_PATH: &str = "/dev/glance/Glance";

// The method-call surface the companion app talks to. One method only.
struct UpdateEndpoint {
    bridge: UpdateBridge,
}

#[zbus::interface(name = "dev.glance.Glance1")]
impl UpdateEndpoint {
    // Force a refresh ahead of schedule. Returns true on success; any
    // platform failure comes back as an error reply carrying the
    // bridge's code and message, never as a dropped connection.
    fn request_update(&self) -> zbus::fdo::Result<bool> {
        self.bridge
            .request_update()
            .map_err(|e| zbus::fdo::Error::Failed(e.to_string()))
    }
}

// Claim the well-known name and serve `RequestUpdate` until the
// returned connection is dropped.
pub fn serve(bridge: UpdateBridge) -> Result<Connection> {
    let conn = Builder::session()
        .context("Connecting to the session D-Bus")?
        .name(BUS_NAME)?
        .serve_at(OBJECT_PATH, UpdateEndpoint { bridge })?
        .build()
        .context("Serving the update endpoint")?;

    info!(bus = BUS_NAME, path = OBJECT_PATH, "Update endpoint online");
    Ok(conn)
}
