//! User lifecycle handlers for MCP integration
//!
//! Create, read, update and delete operations on Okta users. Each handler
//! validates its arguments before touching the API; create, get and update
//! return the API's user object, delete returns a confirmation sentence.

use crate::{
    error::{ToolError, ToolResult},
    mcp_integration::{
        core::{OktaMcpServer, ToolResponse},
        params::{UpdateUserArgs, UserIdArgs},
        validation::parse_arguments,
    },
    okta::{CreateUserRequest, IdentityApi, UpdateUserRequest},
};
use log::{debug, info};
use serde_json::Value;

/// Handle user creation through MCP
///
/// The user is created in the ACTIVE state. A password is set only when
/// `credentials.password.value` is supplied.
///
/// # Errors
///
/// Returns a validation error if the profile is incomplete or an email or
/// login is malformed, and `Failed to create user: ...` if Okta rejects the
/// request (e.g. the login already exists).
pub async fn handle_create_user<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "create user";
    let request: CreateUserRequest = parse_arguments(arguments)?;

    let user = server
        .api
        .create_user(&request)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Created user {}", request.profile.login);
    server.entity_response(OPERATION, user)
}

/// Handle user retrieval through MCP
pub async fn handle_get_user<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "get user";
    let UserIdArgs { user_id } = parse_arguments(arguments)?;

    let user = server
        .api
        .get_user(&user_id)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    server.entity_response(OPERATION, user)
}

/// Handle user profile update through MCP
///
/// Only the profile attributes present in the arguments are sent; the rest of
/// the profile is left as it is in Okta.
pub async fn handle_update_user<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "update user";
    let UpdateUserArgs { user_id, profile } = parse_arguments(arguments)?;
    let request = UpdateUserRequest { profile };

    let user = server
        .api
        .update_user(&user_id, &request)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Updated user {}", user_id);
    server.entity_response(OPERATION, user)
}

/// Handle user deletion through MCP
///
/// Okta only deletes deprovisioned users, so the user is deactivated first
/// and deleted second. Deletion is not attempted if deactivation fails. There
/// is no rollback: if deletion fails after a successful deactivation the user
/// stays deactivated.
pub async fn handle_delete_user<A: IdentityApi>(
    server: &OktaMcpServer<A>,
    arguments: Value,
) -> ToolResult<ToolResponse> {
    const OPERATION: &str = "delete user";
    let UserIdArgs { user_id } = parse_arguments(arguments)?;

    server
        .api
        .deactivate_user(&user_id)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;
    debug!("Deactivated user {}", user_id);

    server
        .api
        .delete_user(&user_id)
        .await
        .map_err(|err| ToolError::failed(OPERATION, err))?;

    info!("Deleted user {}", user_id);
    Ok(ToolResponse::text(format!(
        "User {} has been deactivated and deleted",
        user_id
    )))
}
