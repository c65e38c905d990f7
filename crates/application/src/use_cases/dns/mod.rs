pub mod get_dns_info;

pub use get_dns_info::GetDnsInfoUseCase;
