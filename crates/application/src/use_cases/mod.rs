pub mod dns;
pub mod ip;
pub mod resolved;
pub mod search;

pub use dns::GetDnsInfoUseCase;
pub use ip::{BatchIpInfoUseCase, GetIpInfoUseCase};
pub use resolved::Resolved;
pub use search::WebSearchUseCase;
