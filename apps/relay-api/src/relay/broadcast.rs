//! Alert fan-out to every registered viewer.

use std::sync::Arc;

use super::alert::AlertMessage;
use super::registry::ViewerRegistry;
use super::stats::RelayStats;

/// Fans one alert out to all registered viewers. Cloneable — store in
/// AppState.
#[derive(Clone)]
pub struct AlertBroadcaster {
    registry: Arc<ViewerRegistry>,
    stats: Arc<RelayStats>,
}

impl AlertBroadcaster {
    pub fn new(registry: Arc<ViewerRegistry>, stats: Arc<RelayStats>) -> Self {
        Self { registry, stats }
    }

    /// Deliver `alert` to every viewer registered when the snapshot was
    /// taken. Returns the number of successful deliveries.
    ///
    /// Deliveries are independent: a viewer whose task is gone is evicted
    /// from the registry and the remaining deliveries proceed. Nothing is
    /// surfaced to the sensor that triggered the broadcast.
    pub fn broadcast(&self, alert: AlertMessage) -> usize {
        let targets = self.registry.snapshot();
        let mut delivered = 0;
        for target in targets {
            if target.deliver(alert.clone()) {
                delivered += 1;
            } else {
                // The viewer's own teardown may have removed it already;
                // remove is idempotent.
                self.registry.remove(&target.viewer_id);
                tracing::debug!(viewer_id = %target.viewer_id, "evicted unreachable viewer");
            }
        }
        self.stats.record_alert(delivered);
        delivered
    }
}
