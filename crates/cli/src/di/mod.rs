pub mod cache;
pub mod providers;
pub mod use_cases;

pub use cache::build_cache_store;
pub use providers::Providers;
pub use use_cases::UseCases;
