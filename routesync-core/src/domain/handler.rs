//! Backend handler, integration and invoke-permission types

/// Integration style used for every route: Lambda proxy
pub const INTEGRATION_TYPE: &str = "AWS_PROXY";

/// Lambda proxy integrations are always invoked with POST
pub const INTEGRATION_HTTP_METHOD: &str = "POST";

/// Action granted to the gateway on the handler
pub const INVOKE_ACTION: &str = "lambda:InvokeFunction";

/// Service principal of API Gateway
pub const GATEWAY_PRINCIPAL: &str = "apigateway.amazonaws.com";

/// Backend handler resolved from the handler registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFunction {
    pub name: String,
    pub arn: String,
}

/// Short function name from a handler ARN
/// (`arn:aws:lambda:us-east-1:123:function:project-users` → `project-users`).
/// Returns the input unchanged when it is not a function ARN.
pub fn function_name_from_arn(arn: &str) -> &str {
    arn.rsplit(":function:").next().unwrap_or(arn)
}

/// Forwarding target written on every method integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationTarget {
    pub uri: String,
}

impl IntegrationTarget {
    pub fn for_handler(handler_arn: &str, region: &str) -> Self {
        Self {
            uri: format!(
                "arn:aws:apigateway:{}:lambda:path/2015-03-31/functions/{}/invocations",
                region, handler_arn
            ),
        }
    }

    pub fn integration_type(&self) -> &'static str {
        INTEGRATION_TYPE
    }

    pub fn http_method(&self) -> &'static str {
        INTEGRATION_HTTP_METHOD
    }
}

/// Resource-policy statement allowing a gateway to invoke a handler.
///
/// The statement id depends only on the gateway and function name, so
/// every run targets the same statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionStatement {
    pub function: String,
    pub statement_id: String,
    pub source_arn: String,
}

impl PermissionStatement {
    pub fn for_gateway(handler_arn: &str, gateway_id: &str, account_id: &str, region: &str) -> Self {
        let function_name = function_name_from_arn(handler_arn);
        Self {
            function: handler_arn.to_string(),
            statement_id: format!("apigw-{}-{}", gateway_id, function_name),
            source_arn: format!(
                "arn:aws:execute-api:{}:{}:{}/*/*/*",
                region, account_id, gateway_id
            ),
        }
    }

    pub fn action(&self) -> &'static str {
        INVOKE_ACTION
    }

    pub fn principal(&self) -> &'static str {
        GATEWAY_PRINCIPAL
    }
}

/// Result of a permission grant that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    AlreadyExists,
}
