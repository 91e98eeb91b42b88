//! User tool definitions for MCP integration
//!
//! Lets MCP clients discover the user operations and the shape of their
//! arguments. Argument schemas are generated from the structs the handlers
//! parse into, so the advertised and the enforced shapes cannot drift.
//!
//! # Tool Categories
//!
//! **Lifecycle Operations**:
//! - [`create_user_tool`] - Create and activate a user
//! - [`get_user_tool`] - Fetch a user by id or login
//! - [`update_user_tool`] - Partial profile update
//! - [`delete_user_tool`] - Deactivate, then delete
//!
//! **Query Operations**:
//! - [`list_users_tool`] - List users with optional search

use crate::mcp_integration::params::{ListUsersArgs, UpdateUserArgs, UserIdArgs};
use crate::mcp_integration::validation::input_schema;
use crate::okta::CreateUserRequest;
use rmcp::model::Tool;

pub const LIST_USERS: &str = "okta_list_users_make_request";
pub const CREATE_USER: &str = "okta_create_user_make_request";
pub const GET_USER: &str = "okta_get_user_make_request";
pub const UPDATE_USER: &str = "okta_update_user_make_request";
pub const DELETE_USER: &str = "okta_delete_user_make_request";

/// Tool definition for user listing
pub fn list_users_tool() -> Tool {
    Tool::new(
        LIST_USERS,
        "List users in the Okta org",
        input_schema::<ListUsersArgs>(),
    )
}

/// Tool definition for user creation
pub fn create_user_tool() -> Tool {
    Tool::new(
        CREATE_USER,
        "Create and activate a new user",
        input_schema::<CreateUserRequest>(),
    )
}

/// Tool definition for user retrieval
pub fn get_user_tool() -> Tool {
    Tool::new(
        GET_USER,
        "Get a user by ID or login",
        input_schema::<UserIdArgs>(),
    )
}

/// Tool definition for user update
pub fn update_user_tool() -> Tool {
    Tool::new(
        UPDATE_USER,
        "Update profile attributes of an existing user; omitted attributes are left unchanged",
        input_schema::<UpdateUserArgs>(),
    )
}

/// Tool definition for user deletion
pub fn delete_user_tool() -> Tool {
    Tool::new(
        DELETE_USER,
        "Deactivate and then permanently delete a user",
        input_schema::<UserIdArgs>(),
    )
}
