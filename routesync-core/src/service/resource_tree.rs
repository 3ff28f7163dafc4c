//! Resource tree resolution
//!
//! Makes sure every segment of a desired path exists on the gateway,
//! creating missing segments parent-before-child. Nothing is ever deleted.

use crate::domain::{ResourceTree, RoutePath};
use crate::error::Result;
use crate::gateway::GatewayControlPlane;
use std::sync::Arc;
use tracing::{debug, info};

/// A desired path resolved to its gateway resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub id: String,
    /// Paths created by this call, in creation order
    pub created: Vec<String>,
}

pub struct ResourceTreeResolver<G: GatewayControlPlane> {
    gateway: Arc<G>,
}

impl<G: GatewayControlPlane> ResourceTreeResolver<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Resolve `path` to a resource id, creating any missing segments.
    ///
    /// The tree is listed once per call. An existing path returns without
    /// any write. A failed create leaves the segments created so far in
    /// place; the next call finds them in the listing and continues.
    pub async fn ensure_path(&self, rest_api_id: &str, path: &RoutePath) -> Result<ResolvedResource> {
        let mut tree = ResourceTree::from_nodes(self.gateway.list_resources(rest_api_id).await?)?;

        if let Some(id) = tree.get(path.as_str()) {
            debug!(path = %path, resource_id = id, "Path already exists");
            return Ok(ResolvedResource {
                id: id.to_string(),
                created: Vec::new(),
            });
        }

        let mut parent_id = tree.root_id().to_string();
        let mut created = Vec::new();

        for (segment, partial) in path.segments().zip(path.prefixes()) {
            if let Some(id) = tree.get(&partial) {
                parent_id = id.to_string();
                continue;
            }

            info!(path = %partial, parent_id = %parent_id, "Creating resource");
            let node = self
                .gateway
                .create_resource(rest_api_id, &parent_id, segment)
                .await?;
            parent_id = node.id.clone();
            tree.insert(partial.clone(), node.id);
            created.push(partial);
        }

        Ok(ResolvedResource {
            id: parent_id,
            created,
        })
    }
}
