//! Application tool definitions for MCP integration
//!
//! **Query Operations**:
//! - [`list_applications_tool`] - List applications with optional search
//!
//! **Assignment Operations**:
//! - [`assign_user_to_application_tool`] - Assign a user, with an optional app profile
//! - [`assign_group_to_application_tool`] - Assign a group
//!
//! **Lifecycle Operations**:
//! - [`deactivate_application_tool`] - Deactivate an application
//! - [`delete_application_tool`] - Delete an application; Okta only deletes inactive apps

use crate::mcp_integration::params::{AppGroupArgs, AppIdArgs, AppUserArgs, ListApplicationsArgs};
use crate::mcp_integration::validation::input_schema;
use rmcp::model::Tool;

pub const LIST_APPLICATIONS: &str = "okta_list_applications_make_request";
pub const ASSIGN_USER_TO_APPLICATION: &str = "okta_assign_user_to_application_make_request";
pub const ASSIGN_GROUP_TO_APPLICATION: &str = "okta_assign_group_to_application_make_request";
pub const DELETE_APPLICATION: &str = "okta_delete_application_make_request";
pub const DEACTIVATE_APPLICATION: &str = "okta_deactivate_application_make_request";

/// Tool definition for application listing
pub fn list_applications_tool() -> Tool {
    Tool::new(
        LIST_APPLICATIONS,
        "List applications in the Okta org",
        input_schema::<ListApplicationsArgs>(),
    )
}

/// Tool definition for user-to-application assignment
pub fn assign_user_to_application_tool() -> Tool {
    Tool::new(
        ASSIGN_USER_TO_APPLICATION,
        "Assign a user to an application",
        input_schema::<AppUserArgs>(),
    )
}

/// Tool definition for group-to-application assignment
pub fn assign_group_to_application_tool() -> Tool {
    Tool::new(
        ASSIGN_GROUP_TO_APPLICATION,
        "Assign a group to an application",
        input_schema::<AppGroupArgs>(),
    )
}

/// Tool definition for application deletion
pub fn delete_application_tool() -> Tool {
    Tool::new(
        DELETE_APPLICATION,
        "Delete an application",
        input_schema::<AppIdArgs>(),
    )
}

/// Tool definition for application deactivation
pub fn deactivate_application_tool() -> Tool {
    Tool::new(
        DEACTIVATE_APPLICATION,
        "Deactivate an application",
        input_schema::<AppIdArgs>(),
    )
}
