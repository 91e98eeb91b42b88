//! Group tool definitions for MCP integration
//!
//! - [`list_groups_tool`] - List groups with an optional search expression
//! - [`create_group_tool`] - Create an Okta group
//! - [`assign_user_to_group_tool`] - Add a user to a group

use crate::mcp_integration::params::{GroupMemberArgs, ListGroupsArgs};
use crate::mcp_integration::validation::input_schema;
use crate::okta::CreateGroupRequest;
use rmcp::model::Tool;

pub const LIST_GROUPS: &str = "okta_list_groups_make_request";
pub const CREATE_GROUP: &str = "okta_create_group_make_request";
pub const ASSIGN_USER_TO_GROUP: &str = "okta_assign_user_to_group_make_request";

/// Tool definition for group listing
pub fn list_groups_tool() -> Tool {
    Tool::new(
        LIST_GROUPS,
        "List groups in the Okta org",
        input_schema::<ListGroupsArgs>(),
    )
}

/// Tool definition for group creation
pub fn create_group_tool() -> Tool {
    Tool::new(
        CREATE_GROUP,
        "Create a new Okta group",
        input_schema::<CreateGroupRequest>(),
    )
}

/// Tool definition for group membership
pub fn assign_user_to_group_tool() -> Tool {
    Tool::new(
        ASSIGN_USER_TO_GROUP,
        "Add a user to a group",
        input_schema::<GroupMemberArgs>(),
    )
}
