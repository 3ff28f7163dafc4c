//! Reconciliation logic

pub mod method;
pub mod permission;
pub mod resource_tree;
pub mod stage;
pub mod sync;

pub use method::{MethodOutcome, MethodReconciler};
pub use permission::PermissionGrantor;
pub use resource_tree::{ResolvedResource, ResourceTreeResolver};
pub use stage::StagePublisher;
pub use sync::{RouteSyncService, SyncReport};
