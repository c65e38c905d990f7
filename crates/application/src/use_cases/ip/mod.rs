pub mod batch_ip_info;
pub mod get_ip_info;

pub use batch_ip_info::BatchIpInfoUseCase;
pub use get_ip_info::GetIpInfoUseCase;
