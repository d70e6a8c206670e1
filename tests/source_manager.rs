// tests/source_manager.rs

use glance_rs::core::config::{Config, Refreshable};
use glance_rs::core::source_manager::SourceManager;
use glance_rs::core::store::MemoryBackend;
use std::sync::Arc;

fn config_with_sources(sources: Vec<String>) -> Config {
    let mut cfg = Config {
        sources,
        refresh_secs: 60,
        ..Default::default()
    };
    cfg.modules.fill_default_refresh(cfg.refresh_secs);
    cfg
}

#[test]
fn load_current_class_source() {
    let cfg = config_with_sources(vec!["current_class".into()]);
    let manager = SourceManager::load(&cfg, Arc::new(MemoryBackend::new()));
    assert_eq!(manager.sources().len(), 1);
    assert_eq!(manager.sources()[0].name(), "current_class");
}

#[test]
fn skip_unknown_sources() {
    let cfg = config_with_sources(vec!["foo".into(), "current_class".into()]);
    let manager = SourceManager::load(&cfg, Arc::new(MemoryBackend::new()));
    // "foo" is unknown an should be skipped
    assert_eq!(manager.sources().len(), 1);
    assert_eq!(manager.sources()[0].name(), "current_class");
}

#[test]
fn sources_carry_the_filled_refresh_rate() {
    let mut cfg = config_with_sources(vec!["current_class".into()]);
    cfg.modules.current_class.refresh_secs = Some(30);
    let manager = SourceManager::load(&cfg, Arc::new(MemoryBackend::new()));
    assert_eq!(manager.sources()[0].refresh_secs(), 30);
}
