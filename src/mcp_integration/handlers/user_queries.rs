//! User query handlers for MCP integration

use crate::{
    error::ToolResult,
    mcp_integration::{
        core::{OktaMcpServer, ToolResponse},
        params::ListUsersArgs,
        validation::parse_arguments,
    },
    okta::{IdentityApi, ListUsersParams},
};
use serde_json::Value;

/// Handle user listing through MCP
///
/// Every page is fetched and each user is reduced to its primitive fields.
/// Without `limit` or `query` the API defaults apply.
pub async fn handle_list_users<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    let params: ListUsersParams = parse_arguments::<ListUsersArgs>(arguments)?.into();
    let users = server.api.list_users(params);
    server.list_response("list users", users).await
}
