//! Stage publication

use crate::error::Result;
use crate::gateway::GatewayControlPlane;
use std::sync::Arc;
use tracing::info;

pub struct StagePublisher<G: GatewayControlPlane> {
    gateway: Arc<G>,
}

impl<G: GatewayControlPlane> StagePublisher<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Snapshot the current resource graph into `stage_name`. A new
    /// deployment is created on every call.
    pub async fn deploy_stage(&self, rest_api_id: &str, stage_name: &str) -> Result<Option<String>> {
        let deployment_id = self
            .gateway
            .create_deployment(rest_api_id, stage_name)
            .await?;
        info!(
            rest_api_id,
            stage = stage_name,
            deployment_id = deployment_id.as_deref().unwrap_or("-"),
            "Created deployment"
        );
        Ok(deployment_id)
    }
}
