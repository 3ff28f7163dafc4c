//! Gateway control plane abstraction
//!
//! The reconciliation services only talk to the gateway through
//! [`GatewayControlPlane`], so they can be exercised against mocks or an
//! in-memory tree. [`ApiGatewayClient`] is the AWS API Gateway implementation.

pub mod apigateway;

pub use apigateway::ApiGatewayClient;

use crate::domain::{HttpMethod, IntegrationTarget, ResourceNode, RestApi};
use crate::error::Result;
use async_trait::async_trait;

/// Page size used for every paginated listing
pub const PAGE_SIZE: i32 = 500;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GatewayControlPlane: Send + Sync {
    /// First REST API whose name matches exactly, scanning every page.
    async fn find_rest_api_by_name(&self, name: &str) -> Result<Option<RestApi>>;

    /// Full resource listing of a REST API, all pages.
    async fn list_resources(&self, rest_api_id: &str) -> Result<Vec<ResourceNode>>;

    async fn create_resource(
        &self,
        rest_api_id: &str,
        parent_id: &str,
        path_part: &str,
    ) -> Result<ResourceNode>;

    async fn method_exists(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<bool>;

    /// Create a method with no authorization.
    async fn put_method(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<()>;

    async fn integration_exists(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<bool>;

    /// Create or replace the integration of a method.
    async fn put_integration(
        &self,
        rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
        target: &IntegrationTarget,
    ) -> Result<()>;

    /// Create a deployment bound to `stage_name`, returning its id if reported.
    async fn create_deployment(&self, rest_api_id: &str, stage_name: &str)
        -> Result<Option<String>>;
}
