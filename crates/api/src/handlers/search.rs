use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};

use super::cached_json;
use crate::dto::{ApiError, SearchParams};
use crate::state::AppState;
use tracing::instrument;

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(web_search))
}

#[instrument(skip(state), name = "api_web_search")]
async fn web_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("query parameter 'q' is required"))?;

    Ok(cached_json(state.web_search.execute(&query).await))
}
