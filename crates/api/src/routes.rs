use crate::handlers;
use crate::state::AppState;
use axum::Router;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::index::routes())
        .merge(handlers::health::routes())
        .merge(handlers::dns::routes())
        .merge(handlers::ip::routes())
        .merge(handlers::search::routes())
        .with_state(state)
}
