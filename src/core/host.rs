// src/core/host.rs

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, error, info};

use super::bridge::{UpdateBridge, UpdateRequester};
use super::config::Config;
use super::endpoint;
use super::render::{LogRenderer, Renderer};
use super::source_manager::SourceManager;
use super::store::{JsonBackend, MemoryBackend, PreferenceStore, StoreBackendKind};

// Format every source once and hand the payloads to the renderer.
pub fn render_pass(manager: &SourceManager, renderer: &dyn Renderer) {
    for source in manager.sources() {
        let data = source.on_request(source.slot_type());
        renderer.render(source.name(), &data);
    }
}

// Stand-in for the watch-face runtime: decides when sources re-format
// and pushes each payload at the renderer.
pub struct Host {
    config: Config,
    refresh: Arc<Notify>,
}

impl Host {
    // Initialises configuration
    pub fn new() -> Result<Self> {
        info!("Initialising host");
        let config = Config::load().context("Loading application configuration")?;
        info!(?config, "Host initialised with config");
        Ok(Host {
            config,
            refresh: Arc::new(Notify::new()),
        })
    }

    // Handle the bridge uses to break the wait below.
    pub fn requester(&self) -> HostRequester {
        HostRequester {
            refresh: Arc::clone(&self.refresh),
        }
    }

    // Assembles store, sources and endpoint, then refreshes until the
    // process exits: on every tick, and immediately when the bridge
    // fires.
    pub fn run(&self) -> Result<()> {
        let store: Arc<dyn PreferenceStore> = match self.config.store.backend {
            StoreBackendKind::Json => Arc::new(JsonBackend::from_config(&self.config.store)),
            StoreBackendKind::Memory => Arc::new(MemoryBackend::new()),
        };

        let manager = SourceManager::load(&self.config, store);
        info!(
            num_sources = manager.sources().len(),
            "Loaded sources from config"
        );

        // Bring the endpoint up before the first render so an early
        // companion call is never lost.
        let bridge = UpdateBridge::new(Arc::new(self.requester()));
        let _endpoint = match endpoint::serve(bridge) {
            Ok(conn) => Some(conn),
            Err(e) => {
                // Refreshing on schedule still works without the bus.
                error!(error = %e, "Update endpoint unavailable");
                None
            }
        };

        let renderer = LogRenderer;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("Building the host runtime")?;

        // Tick at the fastest configured rate; a render pass is cheap.
        let tick = manager
            .sources()
            .iter()
            .map(|s| u64::from(s.refresh_secs()))
            .min()
            .unwrap_or(u64::from(self.config.refresh_secs));
        info!(tick_secs = tick, "Starting refresh loop");

        rt.block_on(self.refresh_loop(Duration::from_secs(tick), &manager, &renderer));
        Ok(())
    }

    async fn refresh_loop(&self, tick: Duration, manager: &SourceManager, renderer: &dyn Renderer) {
        let mut interval = tokio::time::interval(tick);
        loop {
            // The first tick fires immediately, giving the initial render.
            tokio::select! {
                _ = interval.tick() => debug!("Scheduled refresh"),
                _ = self.refresh.notified() => debug!("Bridge-requested refresh"),
            }
            render_pass(manager, renderer);
        }
    }
}

// Production `UpdateRequester`: wakes the refresh loop. Repeated
// signals before the loop runs coalesce into one pass.
pub struct HostRequester {
    refresh: Arc<Notify>,
}

impl UpdateRequester for HostRequester {
    fn request_update_all(&self) -> Result<()> {
        self.refresh.notify_one();
        Ok(())
    }
}
