//! AWS Lambda handler registry

use super::HandlerRegistry;
use crate::domain::{HandlerFunction, PermissionOutcome, PermissionStatement};
use crate::error::{Result, SyncError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_lambda::Client;

/// Handler registry backed by the Lambda API
#[derive(Clone)]
pub struct LambdaRegistry {
    client: Client,
}

impl LambdaRegistry {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HandlerRegistry for LambdaRegistry {
    async fn find_function(&self, name: &str) -> Result<Option<HandlerFunction>> {
        let output = match self.client.get_function().function_name(name).send().await {
            Ok(output) => output,
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception())
                {
                    return Ok(None);
                }
                return Err(SyncError::remote("GetFunction", err));
            }
        };

        let arn = output
            .configuration()
            .and_then(|config| config.function_arn())
            .ok_or_else(|| SyncError::Remote {
                operation: "GetFunction",
                message: format!("function '{}' has no ARN in its configuration", name),
            })?;

        Ok(Some(HandlerFunction {
            name: name.to_string(),
            arn: arn.to_string(),
        }))
    }

    async fn add_permission(&self, statement: &PermissionStatement) -> Result<PermissionOutcome> {
        let result = self
            .client
            .add_permission()
            .function_name(&statement.function)
            .statement_id(&statement.statement_id)
            .action(statement.action())
            .principal(statement.principal())
            .source_arn(&statement.source_arn)
            .send()
            .await;

        match result {
            Ok(_) => Ok(PermissionOutcome::Granted),
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_conflict_exception())
                {
                    Ok(PermissionOutcome::AlreadyExists)
                } else {
                    Err(SyncError::remote("AddPermission", err))
                }
            }
        }
    }
}
