//! MCP protocol layer for tool discovery and dispatch
//!
//! Tool discovery, execution dispatch, and the rmcp [`ServerHandler`] that
//! exposes both to MCP clients. A `tools/call` outcome maps onto the wire as:
//!
//! - success: a result with one text content block
//! - unknown tool or rejected arguments: a JSON-RPC `-32602` error, with
//!   `data.field` naming the offending argument when there is one
//! - failed API call: a result with `isError: true` and the
//!   `Failed to <operation>: <message>` text

use super::core::{OktaMcpServer, ToolResponse};
use super::handlers::{application_ops, group_crud, group_queries, user_crud, user_queries};
use super::tools::{application_schemas, group_schemas, user_schemas};
use crate::error::{ToolError, ToolResult};
use crate::okta::IdentityApi;
use log::{debug, error, warn};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::{Value, json};

impl<A: IdentityApi> OktaMcpServer<A> {
    /// Get the list of available MCP tools
    ///
    /// Returns every tool definition a client can discover and call, each
    /// with its name, description and argument schema.
    pub fn get_tools(&self) -> Vec<Tool> {
        vec![
            user_schemas::list_users_tool(),
            user_schemas::create_user_tool(),
            user_schemas::get_user_tool(),
            user_schemas::update_user_tool(),
            user_schemas::delete_user_tool(),
            group_schemas::list_groups_tool(),
            group_schemas::create_group_tool(),
            group_schemas::assign_user_to_group_tool(),
            application_schemas::list_applications_tool(),
            application_schemas::assign_user_to_application_tool(),
            application_schemas::assign_group_to_application_tool(),
            application_schemas::delete_application_tool(),
            application_schemas::deactivate_application_tool(),
        ]
    }

    /// Execute a tool by name with arguments
    ///
    /// Routes the call to the matching handler. Argument validation happens
    /// before any API call; an API failure is returned as
    /// [`ToolError::Failed`] and never retried.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> ToolResult<ToolResponse> {
        debug!("Executing MCP tool: {}", tool_name);

        match tool_name {
            // User operations
            user_schemas::LIST_USERS => user_queries::handle_list_users(self, arguments).await,
            user_schemas::CREATE_USER => user_crud::handle_create_user(self, arguments).await,
            user_schemas::GET_USER => user_crud::handle_get_user(self, arguments).await,
            user_schemas::UPDATE_USER => user_crud::handle_update_user(self, arguments).await,
            user_schemas::DELETE_USER => user_crud::handle_delete_user(self, arguments).await,

            // Group operations
            group_schemas::LIST_GROUPS => group_queries::handle_list_groups(self, arguments).await,
            group_schemas::CREATE_GROUP => group_crud::handle_create_group(self, arguments).await,
            group_schemas::ASSIGN_USER_TO_GROUP => {
                group_crud::handle_assign_user_to_group(self, arguments).await
            }

            // Application operations
            application_schemas::LIST_APPLICATIONS => {
                application_ops::handle_list_applications(self, arguments).await
            }
            application_schemas::ASSIGN_USER_TO_APPLICATION => {
                application_ops::handle_assign_user_to_application(self, arguments).await
            }
            application_schemas::ASSIGN_GROUP_TO_APPLICATION => {
                application_ops::handle_assign_group_to_application(self, arguments).await
            }
            application_schemas::DELETE_APPLICATION => {
                application_ops::handle_delete_application(self, arguments).await
            }
            application_schemas::DEACTIVATE_APPLICATION => {
                application_ops::handle_deactivate_application(self, arguments).await
            }

            // Unknown tool
            _ => Err(ToolError::UnknownTool {
                name: tool_name.to_string(),
            }),
        }
    }

    /// Execute a tool and shape the outcome as a `tools/call` reply.
    pub async fn call_tool_result(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, ErrorData> {
        match self.execute_tool(tool_name, arguments).await {
            Ok(response) => Ok(response.into_call_result()),
            Err(err) if err.is_invalid_request() => {
                warn!("Rejected call to {}: {}", tool_name, err);
                let data = err.field().map(|field| json!({ "field": field }));
                Err(ErrorData::invalid_params(err.to_string(), data))
            }
            Err(err) => {
                error!("Tool {} failed: {}", tool_name, err);
                Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
            }
        }
    }
}

impl<A: IdentityApi + 'static> ServerHandler for OktaMcpServer<A> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.server_info.name.clone(),
                title: None,
                version: self.server_info.version.clone(),
                description: Some(self.server_info.description.clone()),
                icons: None,
                website_url: None,
            },
            instructions: Some(self.server_info.description.clone()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.get_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        self.call_tool_result(&request.name, arguments).await
    }
}
