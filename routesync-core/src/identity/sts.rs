//! STS-backed caller identity

use super::IdentityService;
use crate::error::{Result, SyncError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;

pub struct StsIdentity {
    client: Client,
    session_region: Option<String>,
}

impl StsIdentity {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
            session_region: sdk_config.region().map(|region| region.to_string()),
        }
    }

    pub fn from_client(client: Client, session_region: Option<String>) -> Self {
        Self {
            client,
            session_region,
        }
    }
}

#[async_trait]
impl IdentityService for StsIdentity {
    async fn account_id(&self) -> Result<String> {
        let identity = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| SyncError::remote("GetCallerIdentity", e))?;

        identity
            .account()
            .map(str::to_string)
            .ok_or_else(|| SyncError::Remote {
                operation: "GetCallerIdentity",
                message: "response did not include an account id".to_string(),
            })
    }

    fn session_region(&self) -> Option<String> {
        self.session_region.clone()
    }
}
