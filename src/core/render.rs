// src/core/render.rs

use super::complication::ComplicationData;
use tracing::info;

// Sink for formatted payloads. The watch face itself lives out of
// process; the daemon only hands payloads over and never draws.
pub trait Renderer: Send + Sync {
    fn render(&self, source: &str, data: &ComplicationData);
}

// Default sink: one structured log line per payload.
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&self, source: &str, data: &ComplicationData) {
        info!(source = %source, data = ?data, "Rendering complication");
    }
}
