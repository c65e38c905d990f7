//! InfoRecon Application Layer
//!
//! Cache-aside orchestration: ports for the external collaborators, the
//! adapters that classify their failures, and the use cases that decide
//! what gets cached.
pub mod adapters;
pub mod ports;
pub mod services;
pub mod use_cases;
