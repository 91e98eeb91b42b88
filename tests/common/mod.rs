//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub mod fake_api;
pub mod loopback;

pub use fake_api::{Call, FakeIdentityApi};
pub use loopback::{CannedResponse, LoopbackServer, RecordedRequest};

use serde_json::{Value, json};

/// A user record shaped like `GET /api/v1/users/{id}`
pub fn okta_user(id: &str, login: &str) -> Value {
    json!({
        "id": id,
        "status": "ACTIVE",
        "created": "2024-01-10T18:21:07.000Z",
        "activated": null,
        "profile": {
            "firstName": "Isaac",
            "lastName": "Brock",
            "email": login,
            "login": login
        },
        "credentials": {"provider": {"type": "OKTA", "name": "OKTA"}},
        "_links": {"self": {"href": format!("https://dev-123456.okta.com/api/v1/users/{}", id)}}
    })
}

/// The same record after list sanitization
pub fn sanitized_user(id: &str) -> Value {
    json!({
        "id": id,
        "status": "ACTIVE",
        "created": "2024-01-10T18:21:07.000Z",
        "activated": null
    })
}

/// An Okta error body as `(status, errorCode, errorSummary)`
pub fn not_found() -> (u16, &'static str, &'static str) {
    (404, "E0000007", "Not found: Resource not found: 00u404 (User)")
}
