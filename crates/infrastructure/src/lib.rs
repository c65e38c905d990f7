//! InfoRecon Infrastructure Layer
//!
//! Concrete collaborators behind the application ports.
pub mod cache;
pub mod dns;
pub mod geo;
mod http;
pub mod search;
pub mod whois;
