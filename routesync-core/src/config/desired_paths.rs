//! Per-module desired route list

use crate::domain::RoutePath;
use crate::error::{Result, SyncError};
use serde_json::Value;
use std::path::Path;

/// Ordered list of route paths a module wants on the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesiredPaths(Vec<RoutePath>);

impl DesiredPaths {
    pub fn new(paths: Vec<RoutePath>) -> Self {
        Self(paths)
    }

    /// Read and validate a module's `config.json`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw).map_err(|e| match e {
            SyncError::Config(msg) => SyncError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// The document must be a JSON array of path strings.
    pub fn from_json(raw: &str) -> Result<Self> {
        let Value::Array(items) = serde_json::from_str::<Value>(raw)? else {
            return Err(SyncError::Config(
                "config.json must be a JSON array of path strings".to_string(),
            ));
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => RoutePath::parse(s),
                other => Err(SyncError::Config(format!(
                    "entry {} is not a string: {}",
                    index, other
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoutePath> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DesiredPaths {
    type Item = &'a RoutePath;
    type IntoIter = std::slice::Iter<'a, RoutePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for DesiredPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let paths: Vec<&str> = self.0.iter().map(RoutePath::as_str).collect();
        write!(f, "[{}]", paths.join(", "))
    }
}
