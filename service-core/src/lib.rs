//! service-core: Shared infrastructure for the companion services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod shutdown;
