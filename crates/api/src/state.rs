use inforecon_application::use_cases::{
    BatchIpInfoUseCase, GetDnsInfoUseCase, GetIpInfoUseCase, WebSearchUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_dns_info: Arc<GetDnsInfoUseCase>,
    pub get_ip_info: Arc<GetIpInfoUseCase>,
    pub batch_ip_info: Arc<BatchIpInfoUseCase>,
    pub web_search: Arc<WebSearchUseCase>,
    pub max_batch_size: usize,
    /// Reported by the index endpoint
    pub cache_backend: &'static str,
}
