//! The HTTP client against a loopback responder.
//!
//! Covers request construction (paths, query, headers, bodies), Link-header
//! pagination and the mapping of Okta error responses.

mod common;

use common::{CannedResponse, LoopbackServer, okta_user, sanitized_user};
use futures::TryStreamExt;
use okta_mcp_server::error::ApiError;
use okta_mcp_server::okta::{
    CreateUserRequest, IdentityApi, ListGroupsParams, ListUsersParams, UserProfile,
};
use okta_mcp_server::{OktaClient, OktaConfig, OktaMcpServer};
use serde_json::json;

fn client_for(server: &LoopbackServer) -> OktaClient {
    OktaClient::new(&OktaConfig::new(server.base_url(), "00abcToken")).unwrap()
}

#[tokio::test]
async fn test_list_follows_next_links_until_exhausted() {
    // Relative links resolve against the org, so they stay on the responder.
    let server = LoopbackServer::start(vec![
        CannedResponse::json(
            200,
            json!([okta_user("00u1", "a@example.com"), okta_user("00u2", "b@example.com")]),
        )
        .with_header("Link", "</api/v1/users?limit=2>; rel=\"self\"")
        .with_header("Link", "</api/v1/users?after=00u2&limit=2>; rel=\"next\""),
        CannedResponse::json(200, json!([okta_user("00u3", "c@example.com")]))
            .with_header("Link", "</api/v1/users?after=00u2&limit=2>; rel=\"self\""),
    ])
    .await;
    let client = client_for(&server);

    let users: Vec<_> = client
        .list_users(ListUsersParams::new(Some(2), None))
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&str> = users.iter().map(|u| u["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["00u1", "00u2", "00u3"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/api/v1/users?limit=2");
    assert_eq!(requests[1].target, "/api/v1/users?after=00u2&limit=2");
}

#[tokio::test]
async fn test_list_without_parameters_sends_no_query() {
    let server = LoopbackServer::start(vec![CannedResponse::json(200, json!([]))]).await;
    let client = client_for(&server);

    let groups: Vec<_> = client
        .list_groups(ListGroupsParams::default())
        .try_collect()
        .await
        .unwrap();

    assert!(groups.is_empty());
    assert_eq!(server.requests()[0].target, "/api/v1/groups");
}

#[tokio::test]
async fn test_requests_carry_ssws_token_and_json_headers() {
    let server = LoopbackServer::start(vec![CannedResponse::json(
        200,
        okta_user("00u1", "a@example.com"),
    )])
    .await;
    let client = client_for(&server);

    client.get_user("00u1").await.unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.target, "/api/v1/users/00u1");
    assert_eq!(request.header("authorization"), Some("SSWS 00abcToken"));
    assert_eq!(request.header("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_search_parameters_are_url_encoded() {
    let server = LoopbackServer::start(vec![CannedResponse::json(200, json!([]))]).await;
    let client = client_for(&server);

    let _: Vec<_> = client
        .list_users(ListUsersParams::new(Some(10), Some("isaac brock".to_string())))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(
        server.requests()[0].target,
        "/api/v1/users?limit=10&q=isaac+brock"
    );
}

#[tokio::test]
async fn test_create_user_activates_on_creation() {
    let server = LoopbackServer::start(vec![CannedResponse::json(
        200,
        okta_user("00u9", "isaac.brock@example.com"),
    )])
    .await;
    let client = client_for(&server);

    let request = CreateUserRequest {
        profile: UserProfile {
            first_name: "Isaac".to_string(),
            last_name: "Brock".to_string(),
            email: "isaac.brock@example.com".to_string(),
            login: "isaac.brock@example.com".to_string(),
        },
        credentials: None,
    };
    let created = client.create_user(&request).await.unwrap();
    assert_eq!(created["id"], "00u9");

    let recorded = &server.requests()[0];
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.target, "/api/v1/users?activate=true");
    assert_eq!(
        recorded.json_body(),
        json!({
            "profile": {
                "firstName": "Isaac",
                "lastName": "Brock",
                "email": "isaac.brock@example.com",
                "login": "isaac.brock@example.com"
            }
        })
    );
}

#[tokio::test]
async fn test_lifecycle_calls_accept_empty_bodies() {
    let server = LoopbackServer::start(vec![
        CannedResponse::json(200, json!({})),
        CannedResponse::empty(204),
        CannedResponse::empty(204),
    ])
    .await;
    let client = client_for(&server);

    client.deactivate_application("0oa1").await.unwrap();
    client.delete_application("0oa1").await.unwrap();
    client.assign_user_to_group("00g1", "00u1").await.unwrap();

    let requests: Vec<(String, String)> = server
        .requests()
        .into_iter()
        .map(|r| (r.method, r.target))
        .collect();
    assert_eq!(
        requests,
        vec![
            ("POST".to_string(), "/api/v1/apps/0oa1/lifecycle/deactivate".to_string()),
            ("DELETE".to_string(), "/api/v1/apps/0oa1".to_string()),
            ("PUT".to_string(), "/api/v1/groups/00g1/users/00u1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_okta_error_body_is_surfaced() {
    let server = LoopbackServer::start(vec![CannedResponse::json(
        403,
        json!({
            "errorCode": "E0000006",
            "errorSummary": "You do not have permission to perform the requested action",
            "errorLink": "E0000006",
            "errorId": "oae1",
            "errorCauses": []
        }),
    )])
    .await;
    let client = client_for(&server);

    let err = client.deactivate_user("00u1").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.to_string(),
        "Okta HTTP 403 E0000006 You do not have permission to perform the requested action"
    );
}

#[tokio::test]
async fn test_non_json_error_body_reports_status_only() {
    let server =
        LoopbackServer::start(vec![CannedResponse::raw(500, "<html>upstream</html>")]).await;
    let client = client_for(&server);

    let err = client.get_user("00u1").await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 500, code: None, summary: None }));
    assert_eq!(err.to_string(), "Okta HTTP 500");
}

#[tokio::test]
async fn test_delete_user_tool_stops_after_rejected_deactivation() {
    let server = LoopbackServer::start(vec![CannedResponse::json(
        403,
        json!({"errorCode": "E0000006", "errorSummary": "Forbidden"}),
    )])
    .await;
    let tools = OktaMcpServer::new(client_for(&server));

    let err = tools
        .execute_tool("okta_delete_user_make_request", json!({"userId": "00u1"}))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to delete user: Okta HTTP 403 E0000006 Forbidden"
    );
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, "/api/v1/users/00u1/lifecycle/deactivate");
}

#[tokio::test]
async fn test_list_tool_end_to_end() {
    let server = LoopbackServer::start(vec![
        CannedResponse::json(200, json!([okta_user("00u1", "a@example.com")]))
            .with_header("Link", "</api/v1/users?after=00u1>; rel=\"next\""),
        CannedResponse::json(200, json!([okta_user("00u2", "b@example.com")])),
    ])
    .await;
    let tools = OktaMcpServer::new(client_for(&server));

    let response = tools
        .execute_tool("okta_list_users_make_request", json!({}))
        .await
        .unwrap();

    assert_eq!(
        response.parse_json(),
        Some(json!([sanitized_user("00u1"), sanitized_user("00u2")]))
    );
}
