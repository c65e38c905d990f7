pub mod rdap;

pub use rdap::RdapWhoisClient;
