//! Routesync Core - additive API Gateway route reconciliation
//!
//! Reconciles one module's declared route paths against a shared REST API:
//! missing resources and methods are created, every integration is pointed
//! at the module's Lambda handler, the gateway is allowed to invoke the
//! handler and a fresh deployment is published. Routes owned by other
//! modules are never touched and nothing is ever deleted.

pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod identity;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::{Cli, SyncConfig};
pub use error::{Result, SyncError};
pub use service::{RouteSyncService, SyncReport};
