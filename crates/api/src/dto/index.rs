use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceIndex {
    pub service: &'static str,
    pub version: &'static str,
    pub cache_backend: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}
