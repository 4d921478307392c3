use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::AppState;

/// The admin dashboard page, embedded at compile time. It opens a viewer
/// WebSocket connection back to `/ws`.
const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
