mod cache_gateway;
mod rate_limit_gate;

pub use cache_gateway::{CacheGateway, CachePolicy};
pub use rate_limit_gate::RateLimitGate;
