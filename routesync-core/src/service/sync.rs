//! Route sync orchestration
//!
//! One run, strictly sequential:
//! 1. load the module's desired paths (before any remote call)
//! 2. resolve account id and deployment region
//! 3. find the gateway by name and the handler by `<prefix><module>`
//! 4. ensure every path, then every method of [`HttpMethod::ALL`] on it
//! 5. grant the gateway invoke permission on the handler
//! 6. publish a new deployment to the stage
//!
//! Any error aborts the run and leaves earlier changes in place; rerunning
//! picks up from what already exists.

use crate::config::{DesiredPaths, SyncConfig};
use crate::domain::{HttpMethod, PermissionOutcome};
use crate::error::{Result, SyncError};
use crate::gateway::GatewayControlPlane;
use crate::handler::HandlerRegistry;
use crate::identity::{resolve_region, IdentityService};
use crate::service::{MethodReconciler, PermissionGrantor, ResourceTreeResolver, StagePublisher};
use std::sync::Arc;
use tracing::info;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub module: String,
    pub rest_api_id: String,
    pub handler_arn: String,
    pub stage: String,
    pub region: String,
    pub paths_synced: usize,
    /// Resource paths created, in creation order
    pub resources_created: Vec<String>,
    pub methods_created: usize,
    pub integrations_written: usize,
    pub permission: PermissionOutcome,
    pub deployment_id: Option<String>,
}

pub struct RouteSyncService<G, H, I>
where
    G: GatewayControlPlane,
    H: HandlerRegistry,
    I: IdentityService,
{
    gateway: Arc<G>,
    registry: Arc<H>,
    identity: Arc<I>,
    resolver: ResourceTreeResolver<G>,
    permissions: PermissionGrantor<H>,
    publisher: StagePublisher<G>,
}

impl<G, H, I> RouteSyncService<G, H, I>
where
    G: GatewayControlPlane,
    H: HandlerRegistry,
    I: IdentityService,
{
    pub fn new(gateway: Arc<G>, registry: Arc<H>, identity: Arc<I>) -> Self {
        Self {
            resolver: ResourceTreeResolver::new(gateway.clone()),
            permissions: PermissionGrantor::new(registry.clone()),
            publisher: StagePublisher::new(gateway.clone()),
            gateway,
            registry,
            identity,
        }
    }

    /// Load the module's `config.json` and sync it.
    pub async fn run(&self, config: &SyncConfig) -> Result<SyncReport> {
        let config_path = config.config_path();
        info!(
            module = %config.module,
            stage = %config.stage,
            api_name = %config.api_name,
            "Starting route sync"
        );
        info!(
            modules_dir = %config.modules_dir.display(),
            config_path = %config_path.display(),
            "Loading desired paths"
        );

        let paths = DesiredPaths::load(&config_path)?;
        info!(desired_paths = %paths, "Loaded desired paths");

        self.sync_paths(config, &paths).await
    }

    /// Sync an already loaded path list.
    pub async fn sync_paths(&self, config: &SyncConfig, paths: &DesiredPaths) -> Result<SyncReport> {
        let account_id = self.identity.account_id().await?;
        let region = resolve_region(self.identity.session_region().as_deref());
        info!(account_id = %account_id, region = %region, "Resolved caller identity");

        let api = self
            .gateway
            .find_rest_api_by_name(&config.api_name)
            .await?
            .ok_or_else(|| {
                SyncError::NotFound(format!(
                    "REST API with name '{}'; it must be provisioned before routes are synced",
                    config.api_name
                ))
            })?;
        info!(rest_api_id = %api.id, "Resolved REST API");

        let handler_name = config.handler_name();
        info!(handler = %handler_name, "Resolving handler");
        let handler = self
            .registry
            .find_function(&handler_name)
            .await?
            .ok_or_else(|| SyncError::NotFound(format!("handler function '{}'", handler_name)))?;
        info!(handler_arn = %handler.arn, "Resolved handler");

        let reconciler = MethodReconciler::new(self.gateway.clone(), region.clone());
        let mut resources_created = Vec::new();
        let mut methods_created = 0;
        let mut integrations_written = 0;

        for path in paths {
            info!(path = %path, "Ensuring path");
            let resource = self.resolver.ensure_path(&api.id, path).await?;
            resources_created.extend(resource.created);

            for method in HttpMethod::ALL {
                info!(method = %method, resource_id = %resource.id, "Ensuring method");
                let outcome = reconciler
                    .ensure_method_and_integration(&api.id, &resource.id, method, &handler.arn)
                    .await?;
                if outcome.method_created {
                    methods_created += 1;
                }
                integrations_written += 1;
            }
        }

        let permission = self
            .permissions
            .add_permission(&handler.arn, &api.id, &account_id, &region)
            .await?;
        info!("Permissions in place; creating deployment");

        let deployment_id = self.publisher.deploy_stage(&api.id, &config.stage).await?;

        Ok(SyncReport {
            module: config.module.clone(),
            rest_api_id: api.id,
            handler_arn: handler.arn,
            stage: config.stage.clone(),
            region,
            paths_synced: paths.len(),
            resources_created,
            methods_created,
            integrations_written,
            permission,
            deployment_id,
        })
    }
}
