//! Gateway resource tree types

use crate::error::{Result, SyncError};
use std::collections::HashMap;

use super::RoutePath;

/// A REST API as reported by the control plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestApi {
    pub id: String,
    pub name: String,
}

/// One node of a gateway's resource tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNode {
    pub id: String,
    pub path: String,
    /// `None` only for the root `/`
    pub parent_id: Option<String>,
}

/// Local path → id snapshot of a gateway's resource tree.
#[derive(Debug, Clone)]
pub struct ResourceTree {
    root_id: String,
    ids: HashMap<String, String>,
}

impl ResourceTree {
    /// Build from a full listing. The listing must contain the root `/`.
    pub fn from_nodes<I>(nodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = ResourceNode>,
    {
        let ids: HashMap<String, String> =
            nodes.into_iter().map(|node| (node.path, node.id)).collect();
        let root_id = ids.get(RoutePath::ROOT).cloned().ok_or_else(|| {
            SyncError::Remote {
                operation: "GetResources",
                message: "resource listing has no root '/' resource".to_string(),
            }
        })?;
        Ok(Self { root_id, ids })
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.ids.get(path).map(String::as_str)
    }

    pub fn insert(&mut self, path: impl Into<String>, id: impl Into<String>) {
        self.ids.insert(path.into(), id.into());
    }
}
