use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{chat, dashboard, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(dashboard::router())
        .nest("/health", health::router())
        .nest("/chat", chat::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
