use std::net::SocketAddr;
use std::time::Duration;

use relay_api::AppState;

/// Start a relay server on an ephemeral port. Returns its address and the
/// shared state, so tests can observe the registry and counters directly.
/// The server runs in the background.
pub async fn start_server() -> (SocketAddr, AppState) {
    let state = AppState::new();
    let app = relay_api::routes::router().with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}

/// Poll until the registry reports the expected viewer count.
pub async fn wait_for_viewers(state: &AppState, expected: usize) {
    for _ in 0..50 {
        if state.registry.len() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!(
        "registry never reached {expected} viewers (currently {})",
        state.registry.len()
    );
}

/// Poll until the given number of alerts has been relayed.
pub async fn wait_for_alerts(state: &AppState, expected: u64) {
    for _ in 0..50 {
        if state.stats.snapshot().alerts_relayed >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!(
        "relay never reached {expected} alerts (currently {})",
        state.stats.snapshot().alerts_relayed
    );
}
