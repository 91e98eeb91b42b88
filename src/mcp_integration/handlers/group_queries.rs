//! Group query handlers for MCP integration

use crate::{
    error::ToolResult,
    mcp_integration::{
        core::{OktaMcpServer, ToolResponse},
        params::ListGroupsArgs,
        validation::parse_arguments,
    },
    okta::{IdentityApi, ListGroupsParams},
};
use serde_json::Value;

/// Handle group listing through MCP
///
/// `search` is passed through verbatim as an Okta search expression, e.g.
/// `type eq "OKTA_GROUP"`.
pub async fn handle_list_groups<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    let params: ListGroupsParams = parse_arguments::<ListGroupsArgs>(arguments)?.into();
    let groups = server.api.list_groups(params);
    server.list_response("list groups", groups).await
}
