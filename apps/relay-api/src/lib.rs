pub mod config;
pub mod relay;
pub mod routes;

use std::sync::Arc;

use relay::broadcast::AlertBroadcaster;
use relay::registry::ViewerRegistry;
use relay::stats::RelayStats;

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ViewerRegistry>,
    pub broadcaster: AlertBroadcaster,
    pub stats: Arc<RelayStats>,
}

impl AppState {
    /// Build the shared state for a fresh relay instance.
    pub fn new() -> Self {
        let registry = Arc::new(ViewerRegistry::new());
        let stats = Arc::new(RelayStats::new());
        let broadcaster = AlertBroadcaster::new(registry.clone(), stats.clone());
        Self {
            registry,
            broadcaster,
            stats,
        }
    }
}
