//! Caller identity and deployment region

pub mod sts;

pub use sts::StsIdentity;

use crate::error::Result;
use async_trait::async_trait;

/// Region used when neither the session nor the environment names one
pub const DEFAULT_REGION: &str = "us-east-1";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Account id of the calling credentials
    async fn account_id(&self) -> Result<String>;

    /// Region configured on the SDK session, if any
    fn session_region(&self) -> Option<String>;
}

/// Resolve the deployment region: session default, then `AWS_REGION`,
/// then `AWS_DEFAULT_REGION`, then [`DEFAULT_REGION`].
pub fn resolve_region(session_region: Option<&str>) -> String {
    resolve_region_with(session_region, |key| std::env::var(key).ok())
}

pub fn resolve_region_with<F>(session_region: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    session_region
        .map(str::to_string)
        .into_iter()
        .chain(lookup("AWS_REGION"))
        .chain(lookup("AWS_DEFAULT_REGION"))
        .find(|region| !region.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}
