//! Group creation and membership handlers for MCP integration

use crate::{
    error::{ToolError, ToolResult},
    mcp_integration::{
        core::{OktaMcpServer, ToolResponse},
        params::GroupMemberArgs,
        validation::parse_arguments,
    },
    okta::{CreateGroupRequest, IdentityApi},
};
use log::info;
use serde_json::Value;

/// Handle group creation through MCP
pub async fn handle_create_group<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "create group";
    let request: CreateGroupRequest = parse_arguments(arguments)?;

    let group = server
        .api
        .create_group(&request)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Created group {}", request.profile.name);
    server.entity_response(OPERATION, group)
}

/// Handle adding a user to a group through MCP
pub async fn handle_assign_user_to_group<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "assign user to group";
    let GroupMemberArgs { group_id, user_id } = parse_arguments(arguments)?;

    server
        .api
        .assign_user_to_group(&group_id, &user_id)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Assigned user {} to group {}", user_id, group_id);
    Ok(ToolResponse::text(format!(
        "User {} has been assigned to group {}",
        user_id, group_id
    )))
}
