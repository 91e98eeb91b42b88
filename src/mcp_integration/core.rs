//! Core MCP integration infrastructure
//!
//! This module contains the server type, its metadata, and the response
//! envelope every tool produces. Handlers in [`super::handlers`] build on the
//! helpers defined here to turn raw API results into envelopes.

use crate::config::OktaConfig;
use crate::error::{ApiResult, ToolError, ToolResult};
use crate::okta::{IdentityApi, OktaClient, RecordStream};
use crate::sanitize::sanitize_owned;
use futures::TryStreamExt;
use log::debug;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::Value;

/// Information about the MCP server for client discovery
///
/// # Examples
///
/// ```rust
/// use okta_mcp_server::mcp_integration::McpServerInfo;
///
/// let server_info = McpServerInfo {
///     name: "Okta Staging".to_string(),
///     version: "1.0.0".to_string(),
///     description: "Okta tools against the staging org".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpServerInfo {
    /// Human-readable name of the server
    pub name: String,
    /// Version string for the server implementation
    pub version: String,
    /// Description of the server's purpose
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "Okta API Server".to_string(),
            version: "1.0.0".to_string(),
            description: "MCP Server for accessing Okta APIs".to_string(),
        }
    }
}

/// Which tool responses are reduced to primitive fields.
///
/// List responses are always sanitized. Single-entity responses (create, get,
/// update, assign) are returned in full unless `AllResponses` is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SanitizePolicy {
    #[default]
    ListsOnly,
    AllResponses,
}

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Successful tool result: `{ "content": [ { "type": "text", "text": ... } ] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResponse {
    pub content: Vec<ToolContent>,
}

impl ToolResponse {
    /// Envelope holding a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }

    /// Envelope holding `value` as pretty-printed JSON text
    pub fn json(operation: &str, value: &Value) -> ToolResult<Self> {
        let text =
            serde_json::to_string_pretty(value).map_err(|err| ToolError::failed(operation, err))?;
        Ok(Self::text(text))
    }

    /// Text of the first content block
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ToolContent::Text { text } => text.as_str(),
        })
    }

    /// Convenience for tests and callers: parse the first block back into JSON
    pub fn parse_json(&self) -> Option<Value> {
        self.first_text()
            .and_then(|text| serde_json::from_str(text).ok())
    }

    /// Render as a successful MCP `tools/call` result
    pub fn into_call_result(self) -> CallToolResult {
        let content = self
            .content
            .into_iter()
            .map(|block| match block {
                ToolContent::Text { text } => Content::text(text),
            })
            .collect();
        CallToolResult::success(content)
    }
}

/// MCP server exposing Okta management operations as tools
///
/// The server owns the identity-provider client it was built with and holds
/// no other state, so invocations are independent of each other.
///
/// # Examples
///
/// ```rust,no_run
/// use okta_mcp_server::{OktaConfig, OktaMcpServer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = OktaConfig::from_env()?;
///     let server = OktaMcpServer::from_config(&config)?;
///
///     println!("Available tools: {}", server.get_tools().len());
///     server.run_stdio().await?;
///     Ok(())
/// }
/// ```
pub struct OktaMcpServer<A: IdentityApi> {
    pub(crate) api: A,
    pub(crate) server_info: McpServerInfo,
    pub(crate) sanitize_policy: SanitizePolicy,
}

impl OktaMcpServer<OktaClient> {
    /// Create a server talking to the org described by `config`
    pub fn from_config(config: &OktaConfig) -> ApiResult<Self> {
        let client = OktaClient::new(config)?;
        Ok(Self::new(client).with_sanitize_policy(config.sanitize_policy))
    }
}

impl<A: IdentityApi> OktaMcpServer<A> {
    /// Create a new MCP server with default metadata
    pub fn new(api: A) -> Self {
        Self {
            api,
            server_info: McpServerInfo::default(),
            sanitize_policy: SanitizePolicy::default(),
        }
    }

    /// Create a new MCP server with custom metadata
    pub fn with_info(api: A, server_info: McpServerInfo) -> Self {
        Self {
            api,
            server_info,
            sanitize_policy: SanitizePolicy::default(),
        }
    }

    /// Select which responses are sanitized
    pub fn with_sanitize_policy(mut self, policy: SanitizePolicy) -> Self {
        self.sanitize_policy = policy;
        self
    }

    /// Server metadata advertised during `initialize`
    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }

    pub fn sanitize_policy(&self) -> SanitizePolicy {
        self.sanitize_policy
    }

    /// The identity-provider client tools are executed against
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Drain a record stream, keeping the sanitized form of each record.
    ///
    /// Records that sanitize to nothing are skipped; source order is kept.
    pub(crate) async fn list_response(
        &self,
        operation: &str,
        records: RecordStream,
    ) -> ToolResult<ToolResponse> {
        let data = collect_sanitized(records)
            .await
            .map_err(|err| ToolError::failed(operation, err))?;
        debug!("{}: returning {} records", operation, data.len());
        ToolResponse::json(operation, &Value::Array(data))
    }

    /// Serialize a single entity, sanitizing only if the policy asks for it.
    pub(crate) fn entity_response(&self, operation: &str, entity: Value) -> ToolResult<ToolResponse> {
        let entity = match self.sanitize_policy {
            SanitizePolicy::ListsOnly => entity,
            SanitizePolicy::AllResponses => sanitize_owned(entity).unwrap_or(Value::Null),
        };
        ToolResponse::json(operation, &entity)
    }
}

/// Consume `records` to completion and keep every record with a defined
/// sanitized form, in order.
pub async fn collect_sanitized(mut records: RecordStream) -> ApiResult<Vec<Value>> {
    let mut data = Vec::new();
    while let Some(record) = records.try_next().await? {
        if let Some(simplified) = sanitize_owned(record) {
            data.push(simplified);
        }
    }
    Ok(data)
}
