//! Okta management operations as Model Context Protocol tools.
//!
//! Exposes user, group and application operations of an Okta org as MCP
//! tools served over stdio. Each tool validates its arguments, calls the
//! Okta management API, and returns the result as pretty-printed JSON text.
//!
//! # Core Components
//!
//! - [`OktaMcpServer`] - Tool discovery and dispatch, served over stdio through rmcp
//! - [`IdentityApi`] - The seam to the identity provider; [`OktaClient`] implements it over HTTP
//! - [`sanitize`](sanitize::sanitize) - Reduces nested API records to their primitive fields
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use okta_mcp_server::{OktaConfig, OktaMcpServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OktaConfig::from_env()?;
//! let server = OktaMcpServer::from_config(&config)?;
//! server.run_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod mcp_integration;
pub mod okta;
pub mod sanitize;

// Re-export commonly used types for convenience
pub use config::OktaConfig;
pub use error::{ApiError, ConfigError, ServeError, ToolError, ValidationError};
pub use mcp_integration::{McpServerInfo, OktaMcpServer, SanitizePolicy, ToolResponse};
pub use okta::{IdentityApi, OktaClient, RecordStream};
