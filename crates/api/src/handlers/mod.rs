pub mod dns;
pub mod health;
pub mod index;
pub mod ip;
pub mod search;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inforecon_application::use_cases::Resolved;
use serde::Serialize;

pub const CACHE_STATUS_HEADER: &str = "x-cache-status";
pub const LOOKUP_STATUS_HEADER: &str = "x-lookup-status";

/// JSON body plus `X-Cache-Status: HIT|MISS`, and `X-Lookup-Status: partial`
/// when part of the result is missing because of a transient failure.
pub(crate) fn cached_json<T: Serialize>(resolved: Resolved<T>) -> Response {
    let status = if resolved.cache_hit { "HIT" } else { "MISS" };
    let partial = resolved.partial;
    let mut response = Json(resolved.value).into_response();
    let headers = response.headers_mut();
    headers.insert(CACHE_STATUS_HEADER, HeaderValue::from_static(status));
    if partial {
        headers.insert(LOOKUP_STATUS_HEADER, HeaderValue::from_static("partial"));
    }
    response
}
