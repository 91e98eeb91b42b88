//! HTTP implementation of [`IdentityApi`] against the Okta management API.

use super::api::{IdentityApi, RecordStream};
use super::models::{
    AppUserAssignment, ApplicationGroupAssignment, CreateGroupRequest, CreateUserRequest,
    ListApplicationsParams, ListGroupsParams, ListUsersParams, QueryParams, UpdateUserRequest,
};
use super::pagination::{Page, next_link, paginate};
use crate::config::OktaConfig;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Okta error body, e.g. `{"errorCode": "E0000007", "errorSummary": "Not found: ..."}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OktaErrorBody {
    error_code: Option<String>,
    error_summary: Option<String>,
}

/// Shared request plumbing: base URL, credentials and the connection pool.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub(crate) struct OktaHttp {
    http: reqwest::Client,
    base: Url,
}

impl OktaHttp {
    /// Build a URL under the org from unencoded path segments.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                reason: format!("{} cannot be used as a base URL", self.base),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("Okta request: {} {}", method, url.path());
        self.http.request(method, url)
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn send_json(&self, builder: RequestBuilder) -> ApiResult<Value> {
        let response = self.send(builder).await?;
        let body = response.bytes().await?;
        decode_body(&body)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.send(builder).await?;
        Ok(())
    }

    /// Fetch one page of a list endpoint.
    pub(crate) async fn fetch_page(&self, url: Url) -> ApiResult<Page> {
        let response = self.send(self.request(Method::GET, url)).await?;
        let next = self.next_page_url(response.headers())?;
        let body = response.bytes().await?;

        let records = match decode_body(&body)? {
            Value::Array(records) => records,
            Value::Null => Vec::new(),
            other => {
                return Err(ApiError::Decode {
                    reason: format!("expected a JSON array, got {}", json_kind(&other)),
                });
            }
        };

        Ok(Page { records, next })
    }

    // The cursor is only followed on the configured org so the token never leaves it.
    fn next_page_url(&self, headers: &HeaderMap) -> ApiResult<Option<Url>> {
        let Some(link) = next_link(headers) else {
            return Ok(None);
        };

        let url = self.base.join(&link).map_err(|err| ApiError::InvalidUrl {
            reason: format!("next page link '{}': {}", link, err),
        })?;

        if url.origin() != self.base.origin() {
            warn!("Refusing to follow next page link to another origin: {}", link);
            return Err(ApiError::InvalidUrl {
                reason: format!("next page link '{}' points outside the org", link),
            });
        }

        Ok(Some(url))
    }

    fn list(&self, segments: &[&str], params: &impl QueryParams) -> RecordStream {
        match self.endpoint(segments) {
            Ok(mut url) => {
                let pairs = params.query_pairs();
                if !pairs.is_empty() {
                    url.query_pairs_mut().extend_pairs(pairs);
                }
                paginate(self.clone(), url)
            }
            Err(err) => stream::once(async move { Err::<Value, ApiError>(err) }).boxed(),
        }
    }

    async fn post_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> ApiResult<Value> {
        self.send_json(self.request(Method::POST, url).json(body))
            .await
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.bytes().await.unwrap_or_default();

    match serde_json::from_slice::<OktaErrorBody>(&body) {
        Ok(error) => ApiError::Http {
            status,
            code: error.error_code,
            summary: error.error_summary,
        },
        Err(_) => ApiError::Http {
            status,
            code: None,
            summary: None,
        },
    }
}

fn decode_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|err| ApiError::Decode {
        reason: err.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Client for the Okta management API, authenticated with an SSWS token.
///
/// # Examples
///
/// ```rust,no_run
/// use okta_mcp_server::{OktaClient, OktaConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = OktaConfig::new("dev-123456.okta.com", "00token");
/// let client = OktaClient::new(&config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OktaClient {
    http: OktaHttp,
}

impl OktaClient {
    /// Build a client for the org described by `config`.
    pub fn new(config: &OktaConfig) -> ApiResult<Self> {
        let org_url = config.org_url();
        let base = Url::parse(&org_url).map_err(|err| ApiError::InvalidUrl {
            reason: format!("{}: {}", org_url, err),
        })?;

        let mut authorization = HeaderValue::from_str(&format!("SSWS {}", config.api_token))
            .map_err(|_| ApiError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http: OktaHttp { http, base },
        })
    }

    /// Base URL all requests are issued against
    pub fn org_url(&self) -> &Url {
        &self.http.base
    }
}

#[async_trait]
impl IdentityApi for OktaClient {
    fn list_users(&self, params: ListUsersParams) -> RecordStream {
        self.http.list(&["api", "v1", "users"], &params)
    }

    async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<Value> {
        let mut url = self.http.endpoint(&["api", "v1", "users"])?;
        url.query_pairs_mut().append_pair("activate", "true");
        self.http.post_json(url, request).await
    }

    async fn get_user(&self, user_id: &str) -> ApiResult<Value> {
        let url = self.http.endpoint(&["api", "v1", "users", user_id])?;
        self.http
            .send_json(self.http.request(Method::GET, url))
            .await
    }

    async fn update_user(&self, user_id: &str, request: &UpdateUserRequest) -> ApiResult<Value> {
        let url = self.http.endpoint(&["api", "v1", "users", user_id])?;
        self.http.post_json(url, request).await
    }

    async fn deactivate_user(&self, user_id: &str) -> ApiResult<()> {
        let url = self
            .http
            .endpoint(&["api", "v1", "users", user_id, "lifecycle", "deactivate"])?;
        self.http
            .send_empty(self.http.request(Method::POST, url))
            .await
    }

    async fn delete_user(&self, user_id: &str) -> ApiResult<()> {
        let url = self.http.endpoint(&["api", "v1", "users", user_id])?;
        self.http
            .send_empty(self.http.request(Method::DELETE, url))
            .await
    }

    fn list_groups(&self, params: ListGroupsParams) -> RecordStream {
        self.http.list(&["api", "v1", "groups"], &params)
    }

    async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<Value> {
        let url = self.http.endpoint(&["api", "v1", "groups"])?;
        self.http.post_json(url, request).await
    }

    async fn assign_user_to_group(&self, group_id: &str, user_id: &str) -> ApiResult<()> {
        let url = self
            .http
            .endpoint(&["api", "v1", "groups", group_id, "users", user_id])?;
        self.http
            .send_empty(self.http.request(Method::PUT, url))
            .await
    }

    fn list_applications(&self, params: ListApplicationsParams) -> RecordStream {
        self.http.list(&["api", "v1", "apps"], &params)
    }

    async fn assign_user_to_application(
        &self,
        app_id: &str,
        assignment: &AppUserAssignment,
    ) -> ApiResult<Value> {
        let url = self.http.endpoint(&["api", "v1", "apps", app_id, "users"])?;
        self.http.post_json(url, assignment).await
    }

    async fn assign_group_to_application(
        &self,
        app_id: &str,
        group_id: &str,
        assignment: &ApplicationGroupAssignment,
    ) -> ApiResult<Value> {
        let url = self
            .http
            .endpoint(&["api", "v1", "apps", app_id, "groups", group_id])?;
        self.http
            .send_json(self.http.request(Method::PUT, url).json(assignment))
            .await
    }

    async fn delete_application(&self, app_id: &str) -> ApiResult<()> {
        let url = self.http.endpoint(&["api", "v1", "apps", app_id])?;
        self.http
            .send_empty(self.http.request(Method::DELETE, url))
            .await
    }

    async fn deactivate_application(&self, app_id: &str) -> ApiResult<()> {
        let url = self
            .http
            .endpoint(&["api", "v1", "apps", app_id, "lifecycle", "deactivate"])?;
        self.http
            .send_empty(self.http.request(Method::POST, url))
            .await
    }
}
