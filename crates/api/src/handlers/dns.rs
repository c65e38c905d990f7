use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};
use tracing::{debug, instrument};

use super::cached_json;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dns/{domain}", get(get_dns_info))
        .route("/dns/{domain}/{record_type}", get(get_dns_info_by_type))
}

#[instrument(skip(state), name = "api_get_dns_info")]
async fn get_dns_info(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    let resolved = state.get_dns_info.execute(&domain).await;
    debug!(
        domain = %domain,
        cache_hit = resolved.cache_hit,
        partial = resolved.partial,
        records = resolved.value.record_count(),
        "DNS info served"
    );
    cached_json(resolved)
}

#[instrument(skip(state), name = "api_get_dns_info_by_type")]
async fn get_dns_info_by_type(
    State(state): State<AppState>,
    Path((domain, record_type)): Path<(String, String)>,
) -> Response {
    let resolved = state
        .get_dns_info
        .execute_by_type(&domain, &record_type)
        .await;
    cached_json(resolved)
}
