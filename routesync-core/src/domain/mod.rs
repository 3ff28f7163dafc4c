//! Domain models for gateway route reconciliation

pub mod gateway;
pub mod handler;
pub mod route;

pub use gateway::*;
pub use handler::*;
pub use route::*;
