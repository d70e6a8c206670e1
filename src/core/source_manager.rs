// src/core/source_manager.rs

use super::config::Config;
use super::source::ComplicationSource;
use super::sources::current_class::CurrentClassSource;
use super::store::PreferenceStore;
use std::sync::Arc;
use tracing::warn;

// Manages the set of sources served to the watch face
pub struct SourceManager {
    sources: Vec<Box<dyn ComplicationSource>>,
}

impl SourceManager {
    // Loads all enabled sources in the order specified by the config.
    pub fn load(config: &Config, store: Arc<dyn PreferenceStore>) -> Self {
        let mut sources: Vec<Box<dyn ComplicationSource>> = Vec::new();

        for name in &config.sources {
            match name.as_str() {
                "current_class" => {
                    let source =
                        CurrentClassSource::new(&config.modules.current_class, Arc::clone(&store));
                    sources.push(Box::new(source));
                }
                other => {
                    warn!(source = %other, "Unknown source in config, skipping");
                }
            }
        }

        SourceManager { sources }
    }

    pub fn sources(&self) -> &[Box<dyn ComplicationSource>] {
        &self.sources
    }
}
