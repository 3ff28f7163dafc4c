//! Route paths and the fixed HTTP method set

use crate::error::{Result, SyncError};
use std::fmt;

/// A validated gateway resource path such as `/orders/{id}`.
///
/// Always starts with `/`. Apart from the root itself, it has no trailing
/// slash and no empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    pub const ROOT: &'static str = "/";

    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.starts_with('/') {
            return Err(SyncError::Validation(format!(
                "route path '{}' must start with '/'",
                raw
            )));
        }
        if raw != Self::ROOT && raw[1..].split('/').any(str::is_empty) {
            return Err(SyncError::Validation(format!(
                "route path '{}' contains an empty segment",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Path segments in root-to-leaf order. Empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|seg| !seg.is_empty())
    }

    /// Every partial path from the first segment down to the full path,
    /// e.g. `/a/b` yields `/a`, `/a/b`.
    pub fn prefixes(&self) -> Vec<String> {
        let mut built = String::new();
        self.segments()
            .map(|seg| {
                built.push('/');
                built.push_str(seg);
                built.clone()
            })
            .collect()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTTP verbs bound on every desired resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl HttpMethod {
    /// The reconciliation set, in the order methods are ensured.
    pub const ALL: [HttpMethod; 6] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
