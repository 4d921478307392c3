//! Process-wide relay counters backing the read-only stats surface.

use std::time::Instant;

use parking_lot::Mutex;

/// Counters shared by the broadcaster and the stats route.
///
/// Guarded by a `parking_lot::Mutex` for non-poisoning, fast locking; the
/// critical sections are a handful of integer updates.
pub struct RelayStats {
    started_at: Instant,
    inner: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    alerts_relayed: u64,
    deliveries: u64,
    last_alert_at: Option<Instant>,
}

/// Point-in-time copy of the counters.
pub struct StatsSnapshot {
    pub alerts_relayed: u64,
    pub deliveries: u64,
    pub uptime_secs: u64,
    pub last_alert_age_secs: Option<u64>,
}

impl RelayStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            inner: Mutex::new(Counters::default()),
        }
    }

    /// Record one relayed alert and how many viewers it reached.
    pub fn record_alert(&self, delivered: usize) {
        let mut counters = self.inner.lock();
        counters.alerts_relayed += 1;
        counters.deliveries += delivered as u64;
        counters.last_alert_at = Some(Instant::now());
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let counters = self.inner.lock();
        StatsSnapshot {
            alerts_relayed: counters.alerts_relayed,
            deliveries: counters.deliveries,
            uptime_secs: self.started_at.elapsed().as_secs(),
            last_alert_age_secs: counters.last_alert_at.map(|at| at.elapsed().as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let stats = RelayStats::new();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.alerts_relayed, 0);
        assert_eq!(snapshot.deliveries, 0);
        assert!(snapshot.last_alert_age_secs.is_none());
    }

    #[test]
    fn record_alert_accumulates() {
        let stats = RelayStats::new();
        stats.record_alert(3);
        stats.record_alert(0);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.alerts_relayed, 2);
        assert_eq!(snapshot.deliveries, 3);
        assert!(snapshot.last_alert_age_secs.is_some());
    }
}
