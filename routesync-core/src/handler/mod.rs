//! Handler registry abstraction (backend Lambda functions)

pub mod lambda;

pub use lambda::LambdaRegistry;

use crate::domain::{HandlerFunction, PermissionOutcome, PermissionStatement};
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HandlerRegistry: Send + Sync {
    /// Look up a handler by name. `Ok(None)` when it does not exist.
    async fn find_function(&self, name: &str) -> Result<Option<HandlerFunction>>;

    /// Add an invoke statement to the handler's resource policy.
    ///
    /// A statement that already exists is reported as
    /// [`PermissionOutcome::AlreadyExists`], not as an error.
    async fn add_permission(&self, statement: &PermissionStatement) -> Result<PermissionOutcome>;
}
