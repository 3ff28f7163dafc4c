//! AWS API Gateway (REST v1) control plane client

use super::{GatewayControlPlane, PAGE_SIZE};
use crate::domain::{HttpMethod, IntegrationTarget, ResourceNode, RestApi};
use crate::error::{Result, SyncError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_apigateway::{types::IntegrationType, types::Resource, Client};
use tracing::debug;

/// Methods are created as public routes
const AUTHORIZATION_NONE: &str = "NONE";

/// API Gateway control plane backed by the AWS SDK
#[derive(Clone)]
pub struct ApiGatewayClient {
    client: Client,
}

impl ApiGatewayClient {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Wrap an already configured SDK client (custom endpoint, test credentials).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_node(resource: &Resource) -> Result<ResourceNode> {
    let (Some(id), Some(path)) = (resource.id(), resource.path()) else {
        return Err(SyncError::Remote {
            operation: "GetResources",
            message: format!("resource without id or path: {:?}", resource),
        });
    };
    Ok(ResourceNode {
        id: id.to_string(),
        path: path.to_string(),
        parent_id: resource.parent_id().map(str::to_string),
    })
}

#[async_trait]
impl GatewayControlPlane for ApiGatewayClient {
    async fn find_rest_api_by_name(&self, name: &str) -> Result<Option<RestApi>> {
        let mut pages = self
            .client
            .get_rest_apis()
            .limit(PAGE_SIZE)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| SyncError::remote("GetRestApis", e))?;
            let found = page
                .items()
                .iter()
                .find(|api| api.name() == Some(name))
                .and_then(|api| api.id());
            if let Some(id) = found {
                return Ok(Some(RestApi {
                    id: id.to_string(),
                    name: name.to_string(),
                }));
            }
        }

        Ok(None)
    }

    async fn list_resources(&self, rest_api_id: &str) -> Result<Vec<ResourceNode>> {
        let mut pages = self
            .client
            .get_resources()
            .rest_api_id(rest_api_id)
            .limit(PAGE_SIZE)
            .into_paginator()
            .send();

        let mut nodes = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| SyncError::remote("GetResources", e))?;
            for resource in page.items() {
                nodes.push(to_node(resource)?);
            }
        }

        debug!(rest_api_id, resources = nodes.len(), "Listed gateway resources");
        Ok(nodes)
    }

    async fn create_resource(
        &self,
        rest_api_id: &str,
        parent_id: &str,
        path_part: &str,
    ) -> Result<ResourceNode> {
        let created = self
            .client
            .create_resource()
            .rest_api_id(rest_api_id)
            .parent_id(parent_id)
            .path_part(path_part)
            .send()
            .await
            .map_err(|e| SyncError::remote("CreateResource", e))?;

        let id = created.id().ok_or_else(|| SyncError::Remote {
            operation: "CreateResource",
            message: format!("no id returned for path part '{}'", path_part),
        })?;

        Ok(ResourceNode {
            id: id.to_string(),
            path: created.path().unwrap_or_default().to_string(),
            parent_id: Some(parent_id.to_string()),
        })
    }

    async fn method_exists(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<bool> {
        let result = self
            .client
            .get_method()
            .rest_api_id(rest_api_id)
            .resource_id(resource_id)
            .http_method(method.as_str())
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_not_found_exception())
                {
                    Ok(false)
                } else {
                    Err(SyncError::remote("GetMethod", err))
                }
            }
        }
    }

    async fn put_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<()> {
        self.client
            .put_method()
            .rest_api_id(rest_api_id)
            .resource_id(resource_id)
            .http_method(method.as_str())
            .authorization_type(AUTHORIZATION_NONE)
            .send()
            .await
            .map_err(|e| SyncError::remote("PutMethod", e))?;
        Ok(())
    }

    async fn integration_exists(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<bool> {
        let result = self
            .client
            .get_integration()
            .rest_api_id(rest_api_id)
            .resource_id(resource_id)
            .http_method(method.as_str())
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_not_found_exception())
                {
                    Ok(false)
                } else {
                    Err(SyncError::remote("GetIntegration", err))
                }
            }
        }
    }

    async fn put_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
        target: &IntegrationTarget,
    ) -> Result<()> {
        self.client
            .put_integration()
            .rest_api_id(rest_api_id)
            .resource_id(resource_id)
            .http_method(method.as_str())
            .r#type(IntegrationType::from(target.integration_type()))
            .integration_http_method(target.http_method())
            .uri(&target.uri)
            .send()
            .await
            .map_err(|e| SyncError::remote("PutIntegration", e))?;
        Ok(())
    }

    async fn create_deployment(
        &self,
        rest_api_id: &str,
        stage_name: &str,
    ) -> Result<Option<String>> {
        let deployment = self
            .client
            .create_deployment()
            .rest_api_id(rest_api_id)
            .stage_name(stage_name)
            .send()
            .await
            .map_err(|e| SyncError::remote("CreateDeployment", e))?;

        Ok(deployment.id().map(str::to_string))
    }
}
