#![allow(dead_code)]

pub mod dns_server_mock;
pub mod http_mock;

pub use dns_server_mock::{MockBehavior, MockDnsServer};
pub use http_mock::serve;
