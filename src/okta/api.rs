//! The identity-provider seam.
//!
//! Tool handlers talk to Okta only through [`IdentityApi`]. The production
//! implementation is [`OktaClient`](super::OktaClient); tests substitute a
//! recording fake.

use super::models::{
    AppUserAssignment, ApplicationGroupAssignment, CreateGroupRequest, CreateUserRequest,
    ListApplicationsParams, ListGroupsParams, ListUsersParams, UpdateUserRequest,
};
use crate::error::ApiResult;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;

/// Lazily produced sequence of raw records from a list endpoint.
///
/// Pages are fetched on demand as the stream is polled; an error ends the
/// sequence.
pub type RecordStream = BoxStream<'static, ApiResult<Value>>;

/// Operations the tool surface needs from the identity provider.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// List users, following pagination
    fn list_users(&self, params: ListUsersParams) -> RecordStream;

    /// Create (and activate) a user
    async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<Value>;

    /// Fetch a user by id or login
    async fn get_user(&self, user_id: &str) -> ApiResult<Value>;

    /// Partially update a user's profile
    async fn update_user(&self, user_id: &str, request: &UpdateUserRequest) -> ApiResult<Value>;

    /// Move a user to the DEPROVISIONED state
    async fn deactivate_user(&self, user_id: &str) -> ApiResult<()>;

    /// Permanently delete a deactivated user
    async fn delete_user(&self, user_id: &str) -> ApiResult<()>;

    /// List groups, following pagination
    fn list_groups(&self, params: ListGroupsParams) -> RecordStream;

    /// Create an Okta group
    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<Value>;

    /// Add a user to a group
    async fn assign_user_to_group(&self, group_id: &str, user_id: &str) -> ApiResult<()>;

    /// List applications, following pagination
    fn list_applications(&self, params: ListApplicationsParams) -> RecordStream;

    /// Assign a user to an application
    async fn assign_user_to_application(
        &self,
        app_id: &str,
        assignment: &AppUserAssignment,
    ) -> ApiResult<Value>;

    /// Assign a group to an application
    async fn assign_group_to_application(
        &self,
        app_id: &str,
        group_id: &str,
        assignment: &ApplicationGroupAssignment,
    ) -> ApiResult<Value>;

    /// Delete an inactive application
    async fn delete_application(&self, app_id: &str) -> ApiResult<()>;

    /// Deactivate an application
    async fn deactivate_application(&self, app_id: &str) -> ApiResult<()>;
}
