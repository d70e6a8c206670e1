// src/core/sources/current_class/source.rs

use super::formatter;
use super::snapshot::Snapshot;
use crate::core::complication::{ComplicationData, ComplicationType};
use crate::core::config::CurrentClassConfig;
use crate::core::source::ComplicationSource;
use crate::core::store::{PreferenceStore, Preferences};
use std::sync::Arc;
use tracing::warn;

pub struct CurrentClassSource {
    refresh_secs: u32,
    slot_type: ComplicationType,
    store: Arc<dyn PreferenceStore>,
}

impl CurrentClassSource {
    pub fn new(cfg: &CurrentClassConfig, store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            refresh_secs: cfg
                .refresh_secs
                .expect("CurrentClassConfig.refresh_secs filled by Config::load"),
            slot_type: cfg.complication_type,
            store,
        }
    }

    // Fresh read on every request. A broken or missing store file
    // degrades to an empty snapshot, never to a failed render pass.
    fn snapshot(&self) -> Snapshot {
        let prefs = match self.store.read() {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(error = %e, "Failed to read preference store, treating as empty");
                Preferences::default()
            }
        };
        Snapshot::from_preferences(&prefs)
    }
}

impl ComplicationSource for CurrentClassSource {
    fn name(&self) -> &str {
        "current_class"
    }

    fn refresh_secs(&self) -> u32 {
        self.refresh_secs
    }

    fn slot_type(&self) -> ComplicationType {
        self.slot_type
    }

    fn on_request(&self, requested: ComplicationType) -> ComplicationData {
        formatter::format_for(&self.snapshot(), requested)
    }

    fn preview(&self, requested: ComplicationType) -> Option<ComplicationData> {
        formatter::preview(requested)
    }
}
