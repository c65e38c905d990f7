use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use inforecon_domain::{DomainError, IpInfo};
use std::net::IpAddr;
use tracing::{debug, instrument};

use super::cached_json;
use crate::dto::{ApiError, BatchIpRequest};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ip/batch", post(batch_ip_info))
        .route("/ip/{ip}", get(get_ip_info))
}

#[instrument(skip(state), name = "api_get_ip_info")]
async fn get_ip_info(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Response, ApiError> {
    if ip.trim().parse::<IpAddr>().is_err() {
        return Err(ApiError::bad_request(
            DomainError::InvalidIpAddress(ip).to_string(),
        ));
    }

    Ok(cached_json(state.get_ip_info.execute(&ip).await))
}

/// Unparseable literals inside a batch are reported per element, not
/// rejected.
#[instrument(skip_all, name = "api_batch_ip_info")]
async fn batch_ip_info(
    State(state): State<AppState>,
    body: Result<Json<BatchIpRequest>, JsonRejection>,
) -> Result<Json<Vec<IpInfo>>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    if request.ips.is_empty() {
        return Err(ApiError::bad_request("ips must not be empty"));
    }
    if request.ips.len() > state.max_batch_size {
        return Err(ApiError::bad_request(format!(
            "batch too large: {} addresses, maximum is {}",
            request.ips.len(),
            state.max_batch_size
        )));
    }

    let results = state.batch_ip_info.execute(&request.ips).await;
    debug!(count = results.len(), "IP batch served");
    Ok(Json(results))
}
