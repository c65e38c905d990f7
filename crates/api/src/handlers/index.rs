use axum::{extract::State, routing::get, Json, Router};

use crate::dto::{EndpointInfo, ServiceIndex};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Json<ServiceIndex> {
    let endpoint = |method: &'static str, path: &'static str, description: &'static str| {
        EndpointInfo {
            method,
            path,
            description,
        }
    };

    Json(ServiceIndex {
        service: "inforecon",
        version: env!("CARGO_PKG_VERSION"),
        cache_backend: state.cache_backend,
        endpoints: vec![
            endpoint(
                "GET",
                "/dns/{domain}",
                "A, AAAA, CNAME, MX, NS and TXT records with WHOIS",
            ),
            endpoint(
                "GET",
                "/dns/{domain}/{record_type}",
                "records of one type, or WHOIS",
            ),
            endpoint("GET", "/ip/{ip}", "reverse DNS, geolocation and ASN"),
            endpoint("POST", "/ip/batch", "IP information for a list of addresses"),
            endpoint("GET", "/search?q={query}", "web search"),
            endpoint("GET", "/health", "liveness check"),
        ],
    })
}
