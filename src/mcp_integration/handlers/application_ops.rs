//! Application handlers for MCP integration
//!
//! Listing, user and group assignment, deactivation and deletion of Okta
//! applications.

use crate::{
    error::{ToolError, ToolResult},
    mcp_integration::{
        core::{OktaMcpServer, ToolResponse},
        params::{AppGroupArgs, AppIdArgs, AppUserArgs, ListApplicationsArgs},
        validation::parse_arguments,
    },
    okta::{AppUserAssignment, ApplicationGroupAssignment, IdentityApi, ListApplicationsParams},
};
use log::info;
use serde_json::Value;

/// Handle application listing through MCP
pub async fn handle_list_applications<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    let params: ListApplicationsParams =
        parse_arguments::<ListApplicationsArgs>(arguments)?.into();
    let applications = server.api.list_applications(params);
    server
        .list_response("list applications", applications)
        .await
}

/// Handle assigning a user to an application through MCP
pub async fn handle_assign_user_to_application<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "assign user to application";
    let args: AppUserArgs = parse_arguments(arguments)?;
    let app_id = args.app_id.clone();
    let assignment = AppUserAssignment::from(args);

    let app_user = server
        .api
        .assign_user_to_application(&app_id, &assignment)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Assigned user {} to application {}", assignment.id, app_id);
    server.entity_response(OPERATION, app_user)
}

/// Handle assigning a group to an application through MCP
pub async fn handle_assign_group_to_application<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "assign group to application";
    let AppGroupArgs { app_id, group_id } = parse_arguments(arguments)?;

    let assignment = server
        .api
        .assign_group_to_application(&app_id, &group_id, &ApplicationGroupAssignment::default())
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Assigned group {} to application {}", group_id, app_id);
    server.entity_response(OPERATION, assignment)
}

/// Handle application deletion through MCP
///
/// Okta refuses to delete an active application; deactivate it first.
pub async fn handle_delete_application<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "delete application";
    let AppIdArgs { app_id } = parse_arguments(arguments)?;

    server
        .api
        .delete_application(&app_id)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Deleted application {}", app_id);
    Ok(ToolResponse::text(format!(
        "Application {} has been deleted",
        app_id
    )))
}

/// Handle application deactivation through MCP
pub async fn handle_deactivate_application<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "deactivate application";
    let AppIdArgs { app_id } = parse_arguments(arguments)?;

    server
        .api
        .deactivate_application(&app_id)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Deactivated application {}", app_id);
    Ok(ToolResponse::text(format!(
        "Application {} has been deactivated",
        app_id
    )))
}
