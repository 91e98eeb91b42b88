//! Argument structs for every MCP tool.
//!
//! Each struct is both the advertised `inputSchema` (through `JsonSchema`)
//! and the parsed form of a call's arguments (through `Deserialize`). Tools
//! whose arguments are exactly an Okta payload, such as create-user and
//! create-group, use the payload struct from [`crate::okta`] directly.

use crate::okta::{
    AppUserAssignment, ListApplicationsParams, ListGroupsParams, ListUsersParams,
    UserProfileUpdate,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

// ── users ──

/// Arguments of `okta_list_users_make_request`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListUsersArgs {
    #[schemars(description = "Number of results to return (default 20)")]
    pub limit: Option<u64>,
    #[schemars(description = "search a user by firstName, lastName, or email.")]
    pub query: Option<String>,
}

/// Arguments of the get-user and delete-user tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdArgs {
    #[schemars(description = "User ID or login")]
    pub user_id: String,
}

/// Arguments of `okta_update_user_make_request`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserArgs {
    pub user_id: String,
    /// Profile attributes to change; the rest are left as they are
    pub profile: UserProfileUpdate,
}

// ── groups ──

/// Arguments of `okta_list_groups_make_request`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListGroupsArgs {
    #[schemars(description = "Number of results to return (default 20)")]
    pub limit: Option<u64>,
    #[schemars(description = "Search expression for groups")]
    pub search: Option<String>,
}

/// Arguments of `okta_assign_user_to_group_make_request`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberArgs {
    pub group_id: String,
    pub user_id: String,
}

// ── applications ──

/// Arguments of `okta_list_applications_make_request`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListApplicationsArgs {
    #[schemars(description = "Number of results to return (default 20)")]
    pub limit: Option<u64>,
    #[schemars(description = "Searches for apps with name or label properties")]
    pub query: Option<String>,
}

/// Arguments of `okta_assign_user_to_application_make_request`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppUserArgs {
    pub app_id: String,
    pub user_id: String,
    #[schemars(description = "App-specific profile attributes for the assignment")]
    pub profile: Option<Map<String, Value>>,
}

/// Arguments of `okta_assign_group_to_application_make_request`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppGroupArgs {
    pub app_id: String,
    pub group_id: String,
}

/// Arguments of the delete-application and deactivate-application tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppIdArgs {
    #[schemars(description = "ID of the application")]
    pub app_id: String,
}

impl From<ListUsersArgs> for ListUsersParams {
    fn from(args: ListUsersArgs) -> Self {
        ListUsersParams::new(args.limit, args.query)
    }
}

impl From<ListGroupsArgs> for ListGroupsParams {
    fn from(args: ListGroupsArgs) -> Self {
        ListGroupsParams::new(args.limit, args.search)
    }
}

impl From<ListApplicationsArgs> for ListApplicationsParams {
    fn from(args: ListApplicationsArgs) -> Self {
        ListApplicationsParams::new(args.limit, args.query)
    }
}

impl From<AppUserArgs> for AppUserAssignment {
    fn from(args: AppUserArgs) -> Self {
        AppUserAssignment {
            id: args.user_id,
            profile: args.profile,
        }
    }
}
