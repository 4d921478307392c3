use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::AppState;

/// Read-only relay counters for the dashboard.
#[derive(Serialize)]
struct StatsResponse {
    viewers: usize,
    alerts_relayed: u64,
    deliveries: u64,
    uptime_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_alert_age_secs: Option<u64>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let counters = state.stats.snapshot();
    Json(StatsResponse {
        viewers: state.registry.len(),
        alerts_relayed: counters.alerts_relayed,
        deliveries: counters.deliveries,
        uptime_secs: counters.uptime_secs,
        last_alert_age_secs: counters.last_alert_age_secs,
    })
}
