//! Process configuration read from the environment.
//!
//! Two values are required: the Okta org domain (`OKTA_DOMAIN`) and an API
//! token (`API_TOKEN`). Both are read once at startup; if either is missing
//! the server refuses to start.

use crate::error::{ConfigError, ConfigResult};
use crate::mcp_integration::SanitizePolicy;
use std::fmt;

/// Environment variable holding the Okta org domain (e.g. `dev-123.okta.com`)
pub const OKTA_DOMAIN_VAR: &str = "OKTA_DOMAIN";
/// Environment variable holding the SSWS API token
pub const API_TOKEN_VAR: &str = "API_TOKEN";
/// Optional flag extending sanitization to single-entity responses
pub const SANITIZE_SINGLE_ENTITIES_VAR: &str = "OKTA_SANITIZE_SINGLE_ENTITIES";

/// Connection settings for the Okta management API.
#[derive(Clone, PartialEq, Eq)]
pub struct OktaConfig {
    /// Org domain as configured, without modification
    pub domain: String,
    /// SSWS API token
    pub api_token: String,
    /// Which responses are reduced to primitive fields
    pub sanitize_policy: SanitizePolicy,
}

impl OktaConfig {
    /// Build a configuration from explicit values.
    pub fn new(domain: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            api_token: api_token.into(),
            sanitize_policy: SanitizePolicy::default(),
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domain = required(&lookup, OKTA_DOMAIN_VAR)?;
        let api_token = required(&lookup, API_TOKEN_VAR)?;

        let sanitize_policy = match lookup(SANITIZE_SINGLE_ENTITIES_VAR) {
            None => SanitizePolicy::default(),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" => SanitizePolicy::ListsOnly,
                "1" | "true" | "yes" => SanitizePolicy::AllResponses,
                other => {
                    return Err(ConfigError::InvalidValue {
                        name: SANITIZE_SINGLE_ENTITIES_VAR.to_string(),
                        reason: format!("expected true or false, got '{}'", other),
                    });
                }
            },
        };

        Ok(Self {
            domain,
            api_token,
            sanitize_policy,
        })
    }

    /// Base URL of the org, `https://<domain>` unless a scheme was given.
    pub fn org_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        if domain.starts_with("https://") || domain.starts_with("http://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        }
    }

    /// Override the sanitization policy
    pub fn with_sanitize_policy(mut self, policy: SanitizePolicy) -> Self {
        self.sanitize_policy = policy;
        self
    }
}

impl fmt::Debug for OktaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OktaConfig")
            .field("domain", &self.domain)
            .field("api_token", &"<redacted>")
            .field("sanitize_policy", &self.sanitize_policy)
            .finish()
    }
}

fn required<F>(lookup: &F, name: &str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingVariable {
            name: name.to_string(),
        }),
    }
}
