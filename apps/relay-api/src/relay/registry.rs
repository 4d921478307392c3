//! Shared registry of currently-connected viewers.

use dashmap::DashMap;
use tokio::sync::mpsc;

use super::alert::AlertMessage;

/// Delivery handle for one viewer: feeds the channel its lifecycle task
/// drains into the socket.
pub type ViewerSender = mpsc::UnboundedSender<AlertMessage>;

/// A member captured by [`ViewerRegistry::snapshot`]. Holds its own clone of
/// the delivery handle, so delivering to it never touches the registry.
pub struct ViewerTarget {
    pub viewer_id: String,
    sender: ViewerSender,
}

impl ViewerTarget {
    /// Hand one alert to this viewer's task. Returns `false` if the task is
    /// gone (connection already torn down).
    pub fn deliver(&self, alert: AlertMessage) -> bool {
        self.sender.send(alert).is_ok()
    }
}

/// Concurrency-safe set of connected viewers, shared by every connection
/// task and the broadcaster.
///
/// Uses `DashMap` for shard-level concurrency; no lock is ever held across
/// a send.
pub struct ViewerRegistry {
    viewers: DashMap<String, ViewerSender>,
}

impl ViewerRegistry {
    pub fn new() -> Self {
        Self {
            viewers: DashMap::new(),
        }
    }

    /// Register a viewer's delivery handle. Idempotent: re-adding an ID
    /// replaces the handle without growing membership.
    pub fn add(&self, viewer_id: String, sender: ViewerSender) {
        self.viewers.insert(viewer_id, sender);
    }

    /// Drop a viewer from the registry. A no-op when absent, so the owning
    /// task and the broadcaster's eviction path can both call it.
    pub fn remove(&self, viewer_id: &str) {
        self.viewers.remove(viewer_id);
    }

    /// Point-in-time copy of the current members, safe to iterate without
    /// holding any registry lock.
    pub fn snapshot(&self) -> Vec<ViewerTarget> {
        self.viewers
            .iter()
            .map(|entry| ViewerTarget {
                viewer_id: entry.key().clone(),
                sender: entry.value().clone(),
            })
            .collect()
    }

    /// Number of currently-registered viewers.
    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }
}
