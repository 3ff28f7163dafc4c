//! Method and integration reconciliation

use crate::domain::{HttpMethod, IntegrationTarget};
use crate::error::Result;
use crate::gateway::GatewayControlPlane;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodOutcome {
    /// The method did not exist and was created
    pub method_created: bool,
    /// An existing integration was overwritten rather than created
    pub integration_replaced: bool,
}

/// Ensures a method exists on a resource and points its integration at the
/// module's handler.
///
/// Methods are only created when missing. The integration is written on
/// every call, even when it already targets the same handler.
pub struct MethodReconciler<G: GatewayControlPlane> {
    gateway: Arc<G>,
    region: String,
}

impl<G: GatewayControlPlane> MethodReconciler<G> {
    pub fn new(gateway: Arc<G>, region: impl Into<String>) -> Self {
        Self {
            gateway,
            region: region.into(),
        }
    }

    pub async fn ensure_method_and_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
        handler_arn: &str,
    ) -> Result<MethodOutcome> {
        let mut outcome = MethodOutcome::default();

        if !self
            .gateway
            .method_exists(rest_api_id, resource_id, method)
            .await?
        {
            info!(resource_id, method = %method, "Creating method");
            self.gateway
                .put_method(rest_api_id, resource_id, method)
                .await?;
            outcome.method_created = true;
        }

        let target = IntegrationTarget::for_handler(handler_arn, &self.region);
        outcome.integration_replaced = self
            .gateway
            .integration_exists(rest_api_id, resource_id, method)
            .await?;
        debug!(
            resource_id,
            method = %method,
            uri = %target.uri,
            replaced = outcome.integration_replaced,
            "Writing integration"
        );
        self.gateway
            .put_integration(rest_api_id, resource_id, method, &target)
            .await?;

        Ok(outcome)
    }
}
