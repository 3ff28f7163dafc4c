use anyhow::Result;
use clap::Parser;
use routesync_core::gateway::ApiGatewayClient;
use routesync_core::handler::LambdaRegistry;
use routesync_core::identity::StsIdentity;
use routesync_core::{telemetry, Cli, RouteSyncService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed arguments pick it up
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    telemetry::init(&cli.telemetry());

    let config = cli.into_sync_config()?;
    let sdk_config = aws_config::load_from_env().await;

    let service = RouteSyncService::new(
        Arc::new(ApiGatewayClient::new(&sdk_config)),
        Arc::new(LambdaRegistry::new(&sdk_config)),
        Arc::new(StsIdentity::new(&sdk_config)),
    );

    let report = service.run(&config).await?;

    info!(
        module = %report.module,
        api_name = %config.api_name,
        stage = %report.stage,
        paths = report.paths_synced,
        resources_created = report.resources_created.len(),
        methods_created = report.methods_created,
        integrations_written = report.integrations_written,
        permission = ?report.permission,
        deployment_id = report.deployment_id.as_deref().unwrap_or("-"),
        "Route sync complete"
    );

    Ok(())
}
