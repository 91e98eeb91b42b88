//! Okta management API client.
//!
//! - [`api`] - the [`IdentityApi`] trait the tool handlers depend on
//! - [`models`] - request payloads and list parameters
//! - [`client`] - [`OktaClient`], the `reqwest` implementation
//! - `pagination` - `Link: rel="next"` cursor following

pub mod api;
pub mod client;
pub mod models;
mod pagination;

pub use api::{IdentityApi, RecordStream};
pub use client::OktaClient;
pub use models::{
    AppUserAssignment, ApplicationGroupAssignment, CreateGroupRequest, CreateUserRequest,
    GroupProfile, ListApplicationsParams, ListGroupsParams, ListUsersParams, PasswordCredential,
    QueryParams, UpdateUserRequest, UserCredentials, UserProfile, UserProfileUpdate,
};
