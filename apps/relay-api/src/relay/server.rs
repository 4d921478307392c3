//! WebSocket upgrade handler and per-connection lifecycle loops.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use argus_common::id::{prefix, prefixed_ulid};

use crate::AppState;

use super::alert::AlertMessage;
use super::classify::{classify, Role};

pub fn router() -> Router<AppState> {
    Router::new().route("/ws", get(ws_upgrade))
}

async fn ws_upgrade(
    ws: WebSocketUpgrade,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    ws.on_upgrade(move |socket| handle_connection(socket, user_agent, state))
}

/// Drive one connection from handshake to teardown. The role assigned here
/// is fixed for the life of the connection.
async fn handle_connection(socket: WebSocket, user_agent: String, state: AppState) {
    match classify(&user_agent) {
        Role::Viewer => run_viewer(socket, state).await,
        Role::Sensor => run_sensor(socket, state).await,
    }
}

/// Viewer loop: register for alerts, pump them out to the socket, and read
/// the socket only to notice the close.
///
/// Any read error is treated like a clean close; a reconnecting viewer is a
/// brand-new registration.
async fn run_viewer(socket: WebSocket, state: AppState) {
    let viewer_id = prefixed_ulid(prefix::VIEWER);
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (alert_tx, mut alert_rx) = mpsc::unbounded_channel();
    state.registry.add(viewer_id.clone(), alert_tx);
    tracing::info!(%viewer_id, viewers = state.registry.len(), "viewer connected");

    let mut delivered: u64 = 0;
    loop {
        tokio::select! {
            alert = alert_rx.recv() => {
                match alert {
                    Some(alert) => {
                        if ws_tx.send(alert.into_frame()).await.is_err() {
                            break;
                        }
                        delivered += 1;
                    }
                    // Channel closed: the broadcaster evicted this viewer.
                    None => break,
                }
            }
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(%viewer_id, ?e, "viewer read error");
                        break;
                    }
                    // Viewers have nothing meaningful to say; drop the frame.
                    Some(Ok(_)) => continue,
                }
            }
        }
    }

    // Unconditional: idempotent even if the broadcaster evicted us first.
    state.registry.remove(&viewer_id);
    tracing::info!(
        %viewer_id,
        delivered,
        viewers = state.registry.len(),
        "viewer disconnected"
    );
}

/// Sensor loop: every accepted frame is broadcast to all registered viewers
/// before the next receive, so one sensor's alerts arrive in order.
async fn run_sensor(mut socket: WebSocket, state: AppState) {
    let sensor_id = prefixed_ulid(prefix::SENSOR);
    tracing::info!(%sensor_id, "sensor connected");

    while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!(%sensor_id, ?e, "sensor read error");
                break;
            }
        };

        if let Message::Close(_) = frame {
            break;
        }

        let Some(alert) = AlertMessage::from_frame(frame) else {
            continue;
        };
        let delivered = state.broadcaster.broadcast(alert);
        tracing::debug!(%sensor_id, delivered, "alert relayed");
    }

    tracing::info!(%sensor_id, "sensor disconnected");
}
