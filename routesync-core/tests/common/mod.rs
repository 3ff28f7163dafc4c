//! Common test utilities: in-memory gateway, handler registry and identity

#![allow(dead_code)]

use async_trait::async_trait;
use routesync_core::domain::{
    HandlerFunction, HttpMethod, IntegrationTarget, PermissionOutcome, PermissionStatement,
    ResourceNode, RestApi,
};
use routesync_core::gateway::GatewayControlPlane;
use routesync_core::handler::HandlerRegistry;
use routesync_core::identity::IdentityService;
use routesync_core::{Result, SyncConfig, SyncError};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Mutex;

pub const API_ID: &str = "a1b2c3d4e5";
pub const API_NAME: &str = "MainApiGateway";
pub const ACCOUNT_ID: &str = "123456789012";
pub const REGION: &str = "eu-west-1";

pub fn handler_arn(module: &str) -> String {
    format!(
        "arn:aws:lambda:{}:{}:function:project-{}",
        REGION, ACCOUNT_ID, module
    )
}

/// Remote calls made against [`InMemoryGateway`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub list_resources: usize,
    pub create_resource: usize,
    pub get_method: usize,
    pub put_method: usize,
    pub get_integration: usize,
    pub put_integration: usize,
    pub create_deployment: usize,
    pub find_rest_api: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.list_resources
            + self.create_resource
            + self.get_method
            + self.put_method
            + self.get_integration
            + self.put_integration
            + self.create_deployment
            + self.find_rest_api
    }
}

#[derive(Debug, Default)]
struct GatewayState {
    apis: Vec<RestApi>,
    /// id -> node
    resources: BTreeMap<String, ResourceNode>,
    /// (resource id, method) -> integration
    methods: HashMap<(String, HttpMethod), Option<IntegrationTarget>>,
    deployments: Vec<String>,
    calls: CallCounts,
    next_id: usize,
    /// 1-based `create_resource` call that fails
    fail_create_at: Option<usize>,
}

/// A single REST API with a root resource, kept in memory.
pub struct InMemoryGateway {
    state: Mutex<GatewayState>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        let mut state = GatewayState::default();
        state.apis.push(RestApi {
            id: API_ID.to_string(),
            name: API_NAME.to_string(),
        });
        state.resources.insert(
            "root".to_string(),
            ResourceNode {
                id: "root".to_string(),
                path: "/".to_string(),
                parent_id: None,
            },
        );
        Self {
            state: Mutex::new(state),
        }
    }

    /// A gateway that has no REST API at all
    pub fn without_api() -> Self {
        let gateway = Self::new();
        gateway.state.lock().unwrap().apis.clear();
        gateway
    }

    /// Pre-populate a path (and its ancestors) with the given integration URI on GET.
    pub fn seed_route(&self, path: &str, uri: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let mut parent = "root".to_string();
        let mut built = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            built.push('/');
            built.push_str(segment);
            let existing = state
                .resources
                .values()
                .find(|node| node.path == built)
                .map(|node| node.id.clone());
            parent = match existing {
                Some(id) => id,
                None => insert_node(&mut state, &parent, &built),
            };
        }
        state.methods.insert(
            (parent.clone(), HttpMethod::Get),
            Some(IntegrationTarget {
                uri: uri.to_string(),
            }),
        );
        parent
    }

    pub fn calls(&self) -> CallCounts {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn reset_calls(&self) {
        self.state.lock().unwrap().calls = CallCounts::default();
    }

    /// Make the `n`th `create_resource` call (counted since the last reset) fail.
    /// `None` restores normal behaviour.
    pub fn fail_create_at(&self, n: Option<usize>) {
        self.state.lock().unwrap().fail_create_at = n;
    }

    pub fn deployments(&self) -> Vec<String> {
        self.state.lock().unwrap().deployments.clone()
    }

    /// All resource paths, sorted
    pub fn paths(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut paths: Vec<String> = state.resources.values().map(|n| n.path.clone()).collect();
        paths.sort();
        paths
    }

    pub fn resource_id(&self, path: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .resources
            .values()
            .find(|node| node.path == path)
            .map(|node| node.id.clone())
    }

    /// Paths from the node up to (excluding) the root, following parent ids
    pub fn ancestor_chain(&self, resource_id: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut chain = Vec::new();
        let mut current = state.resources.get(resource_id);
        while let Some(node) = current {
            if node.parent_id.is_none() {
                break;
            }
            chain.push(node.path.clone());
            current = node
                .parent_id
                .as_ref()
                .and_then(|parent| state.resources.get(parent));
        }
        chain.reverse();
        chain
    }

    /// Methods and their integration URIs on a resource
    pub fn methods_on(&self, resource_id: &str) -> HashMap<HttpMethod, Option<String>> {
        let state = self.state.lock().unwrap();
        state
            .methods
            .iter()
            .filter(|((id, _), _)| id == resource_id)
            .map(|((_, method), target)| (*method, target.as_ref().map(|t| t.uri.clone())))
            .collect()
    }

    /// Snapshot of (path, method, uri) for comparing whole gateway states
    pub fn snapshot(&self) -> Vec<(String, String, Option<String>)> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<_> = state
            .methods
            .iter()
            .map(|((id, method), target)| {
                (
                    state.resources[id].path.clone(),
                    method.to_string(),
                    target.as_ref().map(|t| t.uri.clone()),
                )
            })
            .collect();
        rows.sort();
        rows
    }
}

fn insert_node(state: &mut GatewayState, parent_id: &str, path: &str) -> String {
    state.next_id += 1;
    let id = format!("res{:04}", state.next_id);
    state.resources.insert(
        id.clone(),
        ResourceNode {
            id: id.clone(),
            path: path.to_string(),
            parent_id: Some(parent_id.to_string()),
        },
    );
    id
}

fn not_found(operation: &'static str, what: &str) -> SyncError {
    SyncError::Remote {
        operation,
        message: format!("NotFoundException: {}", what),
    }
}

#[async_trait]
impl GatewayControlPlane for InMemoryGateway {
    async fn find_rest_api_by_name(&self, name: &str) -> Result<Option<RestApi>> {
        let mut state = self.state.lock().unwrap();
        state.calls.find_rest_api += 1;
        Ok(state.apis.iter().find(|api| api.name == name).cloned())
    }

    async fn list_resources(&self, rest_api_id: &str) -> Result<Vec<ResourceNode>> {
        let mut state = self.state.lock().unwrap();
        state.calls.list_resources += 1;
        if rest_api_id != API_ID {
            return Err(not_found("GetResources", rest_api_id));
        }
        Ok(state.resources.values().cloned().collect())
    }

    async fn create_resource(
        &self,
        _rest_api_id: &str,
        parent_id: &str,
        path_part: &str,
    ) -> Result<ResourceNode> {
        let mut state = self.state.lock().unwrap();
        state.calls.create_resource += 1;
        if state.fail_create_at == Some(state.calls.create_resource) {
            return Err(SyncError::Remote {
                operation: "CreateResource",
                message: "TooManyRequestsException: Too Many Requests".to_string(),
            });
        }
        let parent_path = state
            .resources
            .get(parent_id)
            .map(|node| node.path.clone())
            .ok_or_else(|| not_found("CreateResource", parent_id))?;
        let path = if parent_path == "/" {
            format!("/{}", path_part)
        } else {
            format!("{}/{}", parent_path, path_part)
        };
        if state.resources.values().any(|node| node.path == path) {
            return Err(SyncError::Remote {
                operation: "CreateResource",
                message: format!("ConflictException: {} exists", path),
            });
        }
        let id = insert_node(&mut state, parent_id, &path);
        Ok(state.resources[&id].clone())
    }

    async fn method_exists(
        &self,
        _rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.calls.get_method += 1;
        Ok(state
            .methods
            .contains_key(&(resource_id.to_string(), method)))
    }

    async fn put_method(
        &self,
        _rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.put_method += 1;
        if !state.resources.contains_key(resource_id) {
            return Err(not_found("PutMethod", resource_id));
        }
        state.methods.insert((resource_id.to_string(), method), None);
        Ok(())
    }

    async fn integration_exists(
        &self,
        _rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.calls.get_integration += 1;
        Ok(matches!(
            state.methods.get(&(resource_id.to_string(), method)),
            Some(Some(_))
        ))
    }

    async fn put_integration(
        &self,
        _rest_api_id: &str,
        resource_id: &str,
        method: HttpMethod,
        target: &IntegrationTarget,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.put_integration += 1;
        match state.methods.get_mut(&(resource_id.to_string(), method)) {
            Some(slot) => {
                *slot = Some(target.clone());
                Ok(())
            }
            None => Err(not_found("PutIntegration", resource_id)),
        }
    }

    async fn create_deployment(
        &self,
        _rest_api_id: &str,
        stage_name: &str,
    ) -> Result<Option<String>> {
        let mut state = self.state.lock().unwrap();
        state.calls.create_deployment += 1;
        state.deployments.push(stage_name.to_string());
        Ok(Some(format!("dep{}", state.deployments.len())))
    }
}

/// Handler registry with a fixed set of functions and a policy per function
#[derive(Default)]
pub struct InMemoryRegistry {
    functions: HashMap<String, String>,
    policies: Mutex<HashMap<String, Vec<PermissionStatement>>>,
}

impl InMemoryRegistry {
    pub fn with_modules(modules: &[&str]) -> Self {
        Self {
            functions: modules
                .iter()
                .map(|m| (format!("project-{}", m), handler_arn(m)))
                .collect(),
            policies: Mutex::new(HashMap::new()),
        }
    }

    pub fn statements(&self, function_arn: &str) -> Vec<PermissionStatement> {
        self.policies
            .lock()
            .unwrap()
            .get(function_arn)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl HandlerRegistry for InMemoryRegistry {
    async fn find_function(&self, name: &str) -> Result<Option<HandlerFunction>> {
        Ok(self.functions.get(name).map(|arn| HandlerFunction {
            name: name.to_string(),
            arn: arn.clone(),
        }))
    }

    async fn add_permission(&self, statement: &PermissionStatement) -> Result<PermissionOutcome> {
        let mut policies = self.policies.lock().unwrap();
        let policy = policies.entry(statement.function.clone()).or_default();
        if policy
            .iter()
            .any(|existing| existing.statement_id == statement.statement_id)
        {
            return Ok(PermissionOutcome::AlreadyExists);
        }
        policy.push(statement.clone());
        Ok(PermissionOutcome::Granted)
    }
}

pub struct StaticIdentity;

#[async_trait]
impl IdentityService for StaticIdentity {
    async fn account_id(&self) -> Result<String> {
        Ok(ACCOUNT_ID.to_string())
    }

    fn session_region(&self) -> Option<String> {
        Some(REGION.to_string())
    }
}

/// Write `<dir>/<module>/config.json` and return a matching config
pub fn write_module_config(dir: &Path, module: &str, contents: &str) -> SyncConfig {
    let module_dir = dir.join(module);
    std::fs::create_dir_all(&module_dir).unwrap();
    std::fs::write(module_dir.join("config.json"), contents).unwrap();
    SyncConfig {
        module: module.to_string(),
        stage: "prod".to_string(),
        api_name: API_NAME.to_string(),
        lambda_name_prefix: "project-".to_string(),
        modules_dir: dir.to_path_buf(),
    }
}
