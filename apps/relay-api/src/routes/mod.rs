pub mod dashboard;
pub mod health;
pub mod stats;

use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .merge(crate::relay::server::router())
        .nest("/api/v1", stats::router())
}
