//! Invoke permission for the gateway on the module handler

use crate::domain::{PermissionOutcome, PermissionStatement};
use crate::error::Result;
use crate::handler::HandlerRegistry;
use std::sync::Arc;
use tracing::info;

pub struct PermissionGrantor<H: HandlerRegistry> {
    registry: Arc<H>,
}

impl<H: HandlerRegistry> PermissionGrantor<H> {
    pub fn new(registry: Arc<H>) -> Self {
        Self { registry }
    }

    /// Allow `gateway_id` (any stage, method and resource) to invoke the
    /// handler. An existing statement with the same id counts as success.
    pub async fn add_permission(
        &self,
        handler_arn: &str,
        gateway_id: &str,
        account_id: &str,
        region: &str,
    ) -> Result<PermissionOutcome> {
        let statement = PermissionStatement::for_gateway(handler_arn, gateway_id, account_id, region);
        let outcome = self.registry.add_permission(&statement).await?;

        match outcome {
            PermissionOutcome::Granted => info!(
                statement_id = %statement.statement_id,
                source_arn = %statement.source_arn,
                "Granted invoke permission"
            ),
            PermissionOutcome::AlreadyExists => info!(
                statement_id = %statement.statement_id,
                "Invoke permission already present"
            ),
        }

        Ok(outcome)
    }
}
