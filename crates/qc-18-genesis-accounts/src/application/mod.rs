//! # Application Layer
//!
//! Address resolution and the service that drives one genesis update.

pub mod resolver;
pub mod service;

pub use resolver::AddressResolver;
pub use service::GenesisAccountService;
