// src/core/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use super::complication::ComplicationType;
use super::store::StoreBackendKind;

use tracing::info;

use super::config_loader::config_paths;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ModuleConfig {
    #[serde(default)]
    pub current_class: CurrentClassConfig,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            current_class: CurrentClassConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CurrentClassConfig {
    #[serde(default)]
    pub refresh_secs: Option<u32>,
    // The payload type the hosting slot requests
    #[serde(default)]
    pub complication_type: ComplicationType,
}

impl Default for CurrentClassConfig {
    fn default() -> Self {
        CurrentClassConfig {
            refresh_secs: None,
            complication_type: ComplicationType::RangedValue,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackendKind,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            backend: StoreBackendKind::Json,
            path: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Which sources to enable, in order
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    // Refresh interval for sources that poll (in seconds)
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u32,

    // Preference store backend
    #[serde(default)]
    pub store: StoreConfig,

    // Module-specific configs
    #[serde(default)]
    pub modules: ModuleConfig,
}

impl Config {
    // Loads system default and then overrides with user config, if present
    pub fn load() -> Result<Self> {
        let (system, user) = config_paths();
        info!(system = ?system, user = ?user, "Loading configuration paths");

        // Ensure the user config directory exists
        if let Some(parent) = user.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory at {parent:?}"))?;
        }

        // 1. Read system default (which should always exist in installed package)
        info!(path = ?system, "Reading system default config");
        let base = fs::read_to_string(&system)
            .with_context(|| format!("Reading system default config at {system:?}"))?;
        let mut cfg: Config = toml::from_str(&base).context("Parsing system default config")?;

        // 2. If user config exists, merge/override
        if user.exists() {
            info!(path = ?user, "Overlaying user configuration");
            let overlay = fs::read_to_string(&user)
                .with_context(|| format!("Reading user config at {user:?}"))?;
            let user_cfg: Config = toml::from_str(&overlay).context("Parsing user config")?;

            // Simple merge: replace entire sources list & refresh
            cfg.sources = user_cfg.sources;
            cfg.refresh_secs = user_cfg.refresh_secs;
            cfg.store = user_cfg.store;
            cfg.modules = user_cfg.modules;
        } else {
            info!(path = ?user, "No user config found; using defaults");
        }

        // 3. Validate config values
        if cfg.refresh_secs == 0 {
            Err(anyhow::anyhow!("refresh_secs must be at least 1"))?
        }

        // 4. Mutate each sub-config in place: fill in missing per-module rates
        let global = cfg.refresh_secs;
        cfg.modules.fill_default_refresh(global);

        info!(?cfg, "Configuration loaded succesfully");
        Ok(cfg)
    }
}

// Default to 1 minute if not specified
fn default_refresh_secs() -> u32 {
    60
}

// Default to no sources if not specified
fn default_sources() -> Vec<String> {
    Vec::new()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sources: Vec::new(),
            refresh_secs: default_refresh_secs(),
            store: StoreConfig::default(),
            modules: ModuleConfig::default(),
        }
    }
}

pub trait Refreshable {
    // Fills `refresh_secs` with the global rate unless overridden
    fn fill_default_refresh(&mut self, global: u32);
}

impl Refreshable for CurrentClassConfig {
    fn fill_default_refresh(&mut self, global: u32) {
        self.refresh_secs = self.refresh_secs.or(Some(global));
    }
}

impl Refreshable for ModuleConfig {
    fn fill_default_refresh(&mut self, global: u32) {
        self.current_class.fill_default_refresh(global);
    }
}
