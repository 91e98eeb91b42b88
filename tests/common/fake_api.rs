//! Recording fake of the identity provider.

use async_trait::async_trait;
use futures::{StreamExt, stream};
use okta_mcp_server::error::{ApiError, ApiResult};
use okta_mcp_server::okta::{
    AppUserAssignment, ApplicationGroupAssignment, CreateGroupRequest, CreateUserRequest,
    IdentityApi, ListApplicationsParams, ListGroupsParams, ListUsersParams, RecordStream,
    UpdateUserRequest,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One call made against the fake, with the payload it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListUsers(ListUsersParams),
    CreateUser(Value),
    GetUser(String),
    UpdateUser(String, Value),
    DeactivateUser(String),
    DeleteUser(String),
    ListGroups(ListGroupsParams),
    CreateGroup(Value),
    AssignUserToGroup { group_id: String, user_id: String },
    ListApplications(ListApplicationsParams),
    AssignUserToApplication(String, Value),
    AssignGroupToApplication(String, String, Value),
    DeleteApplication(String),
    DeactivateApplication(String),
}

#[derive(Debug, Clone)]
struct Failure {
    status: u16,
    code: String,
    summary: String,
}

impl Failure {
    fn to_error(&self) -> ApiError {
        ApiError::Http {
            status: self.status,
            code: Some(self.code.clone()),
            summary: Some(self.summary.clone()),
        }
    }
}

/// In-memory [`IdentityApi`] that records every call.
///
/// Single-entity calls return the configured entity; list calls stream the
/// configured records. Any method can be told to fail by name.
#[derive(Default)]
pub struct FakeIdentityApi {
    calls: Arc<Mutex<Vec<Call>>>,
    entity: Value,
    records: Vec<Value>,
    failures: HashMap<&'static str, Failure>,
    list_failure: Option<Failure>,
}

impl FakeIdentityApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, entity: Value) -> Self {
        self.entity = entity;
        self
    }

    pub fn with_records(mut self, records: Vec<Value>) -> Self {
        self.records = records;
        self
    }

    /// Make the named method (e.g. `"deactivate_user"`) fail
    pub fn failing(mut self, method: &'static str, status: u16, code: &str, summary: &str) -> Self {
        self.failures.insert(
            method,
            Failure {
                status,
                code: code.to_string(),
                summary: summary.to_string(),
            },
        );
        self
    }

    /// Make list streams fail after yielding every configured record
    pub fn failing_lists_after_records(mut self, status: u16, code: &str, summary: &str) -> Self {
        self.list_failure = Some(Failure {
            status,
            code: code.to_string(),
            summary: summary.to_string(),
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Shared view of the call log that outlives a server owning the fake
    pub fn call_log(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome<T>(&self, method: &str, value: T) -> ApiResult<T> {
        match self.failures.get(method) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(value),
        }
    }

    fn list(&self, method: &str) -> RecordStream {
        if let Some(failure) = self.failures.get(method) {
            return stream::iter(vec![Err(failure.to_error())]).boxed();
        }

        let mut items: Vec<ApiResult<Value>> = self.records.iter().cloned().map(Ok).collect();
        if let Some(failure) = &self.list_failure {
            items.push(Err(failure.to_error()));
        }
        stream::iter(items).boxed()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

#[async_trait]
impl IdentityApi for FakeIdentityApi {
    fn list_users(&self, params: ListUsersParams) -> RecordStream {
        self.record(Call::ListUsers(params));
        self.list("list_users")
    }

    async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<Value> {
        self.record(Call::CreateUser(to_json(request)));
        self.outcome("create_user", self.entity.clone())
    }

    async fn get_user(&self, user_id: &str) -> ApiResult<Value> {
        self.record(Call::GetUser(user_id.to_string()));
        self.outcome("get_user", self.entity.clone())
    }

    async fn update_user(&self, user_id: &str, request: &UpdateUserRequest) -> ApiResult<Value> {
        self.record(Call::UpdateUser(user_id.to_string(), to_json(request)));
        self.outcome("update_user", self.entity.clone())
    }

    async fn deactivate_user(&self, user_id: &str) -> ApiResult<()> {
        self.record(Call::DeactivateUser(user_id.to_string()));
        self.outcome("deactivate_user", ())
    }

    async fn delete_user(&self, user_id: &str) -> ApiResult<()> {
        self.record(Call::DeleteUser(user_id.to_string()));
        self.outcome("delete_user", ())
    }

    fn list_groups(&self, params: ListGroupsParams) -> RecordStream {
        self.record(Call::ListGroups(params));
        self.list("list_groups")
    }

    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<Value> {
        self.record(Call::CreateGroup(to_json(request)));
        self.outcome("create_group", self.entity.clone())
    }

    async fn assign_user_to_group(&self, group_id: &str, user_id: &str) -> ApiResult<()> {
        self.record(Call::AssignUserToGroup {
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
        });
        self.outcome("assign_user_to_group", ())
    }

    fn list_applications(&self, params: ListApplicationsParams) -> RecordStream {
        self.record(Call::ListApplications(params));
        self.list("list_applications")
    }

    async fn assign_user_to_application(
        &self,
        app_id: &str,
        assignment: &AppUserAssignment,
    ) -> ApiResult<Value> {
        self.record(Call::AssignUserToApplication(
            app_id.to_string(),
            to_json(assignment),
        ));
        self.outcome("assign_user_to_application", self.entity.clone())
    }

    async fn assign_group_to_application(
        &self,
        app_id: &str,
        group_id: &str,
        assignment: &ApplicationGroupAssignment,
    ) -> ApiResult<Value> {
        self.record(Call::AssignGroupToApplication(
            app_id.to_string(),
            group_id.to_string(),
            to_json(assignment),
        ));
        self.outcome("assign_group_to_application", self.entity.clone())
    }

    async fn delete_application(&self, app_id: &str) -> ApiResult<()> {
        self.record(Call::DeleteApplication(app_id.to_string()));
        self.outcome("delete_application", ())
    }

    async fn deactivate_application(&self, app_id: &str) -> ApiResult<()> {
        self.record(Call::DeactivateApplication(app_id.to_string()));
        self.outcome("deactivate_application", ())
    }
}
