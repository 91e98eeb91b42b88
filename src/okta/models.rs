//! Request payloads and list parameters for the Okta management API.
//!
//! Payload structs serialize with Okta's camelCase field names and leave out
//! optional fields that were not supplied, so an absent value is never sent
//! as an explicit `null`. The user and group payloads double as tool
//! arguments, so they also derive `Deserialize` and `JsonSchema`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters that a list endpoint forwards to the API.
pub trait QueryParams {
    /// Name/value pairs to append to the request URL, present values only
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Parameters for `GET /api/v1/users`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersParams {
    /// Page size
    pub limit: Option<u64>,
    /// Free-text match on firstName, lastName or email (`q`)
    pub query: Option<String>,
}

/// Parameters for `GET /api/v1/groups`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGroupsParams {
    /// Page size
    pub limit: Option<u64>,
    /// Okta search expression (`search`)
    pub search: Option<String>,
}

/// Parameters for `GET /api/v1/apps`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApplicationsParams {
    /// Page size
    pub limit: Option<u64>,
    /// Match on app name or label (`q`)
    pub query: Option<String>,
}

// A zero limit or empty search string means "use the API default".
fn present_limit(limit: Option<u64>) -> Option<u64> {
    limit.filter(|l| *l > 0)
}

fn present_text(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

fn pairs(limit: Option<u64>, key: &'static str, text: Option<&String>) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(2);
    if let Some(limit) = limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(text) = text {
        pairs.push((key, text.clone()));
    }
    pairs
}

impl ListUsersParams {
    pub fn new(limit: Option<u64>, query: Option<String>) -> Self {
        Self {
            limit: present_limit(limit),
            query: present_text(query),
        }
    }
}

impl QueryParams for ListUsersParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        pairs(self.limit, "q", self.query.as_ref())
    }
}

impl ListGroupsParams {
    pub fn new(limit: Option<u64>, search: Option<String>) -> Self {
        Self {
            limit: present_limit(limit),
            search: present_text(search),
        }
    }
}

impl QueryParams for ListGroupsParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        pairs(self.limit, "search", self.search.as_ref())
    }
}

impl ListApplicationsParams {
    pub fn new(limit: Option<u64>, query: Option<String>) -> Self {
        Self {
            limit: present_limit(limit),
            query: present_text(query),
        }
    }
}

impl QueryParams for ListApplicationsParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        pairs(self.limit, "q", self.query.as_ref())
    }
}

/// Full user profile required at creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[schemars(email)]
    pub email: String,
    /// Okta login, in email form
    #[schemars(email)]
    pub login: String,
}

/// Partial profile for `POST /api/v1/users/{id}`; only supplied fields change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(email)]
    pub login: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PasswordCredential {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordCredential>,
}

/// Body of `POST /api/v1/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateUserRequest {
    pub profile: UserProfile,
    /// Omit to create the user without a password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<UserCredentials>,
}

/// Body of `POST /api/v1/users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    pub profile: UserProfileUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupProfile {
    /// Name of the group
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/v1/groups`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateGroupRequest {
    pub profile: GroupProfile,
}

/// Body of `POST /api/v1/apps/{appId}/users`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppUserAssignment {
    /// Id of the user being assigned
    pub id: String,
    /// App-specific profile attributes, free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Map<String, Value>>,
}

/// Body of `PUT /api/v1/apps/{appId}/groups/{groupId}`; always empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationGroupAssignment {}
