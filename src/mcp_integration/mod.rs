//! MCP (Model Context Protocol) integration for the Okta management API
//!
//! Exposes a fixed set of Okta user, group and application operations as
//! MCP tools served over stdio.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   MCP Client    │───▶│  MCP Protocol    │───▶│  Okta API       │
//! │   (stdio)       │    │  (This Module)   │    │  (IdentityApi)  │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//!          │                        │                       │
//!          ▼                        ▼                       ▼
//!    Tool Discovery          Argument Validation    Users / Groups / Apps
//!    Line screening (rmcp)   Response Envelope      Link-header paging
//! ```
//!
//! A call flows straight through: validate arguments, make one or two API
//! calls, sanitize list results, serialize, wrap in a [`ToolResponse`].
//!
//! ## Module Structure
//!
//! - `core` - [`OktaMcpServer`], [`McpServerInfo`], [`ToolResponse`], [`SanitizePolicy`]
//! - `params` - argument structs, one per tool shape
//! - `validation` - schema generation and schema-driven argument parsing
//! - `protocol` - tool discovery, dispatch and the rmcp `ServerHandler`
//! - `transport` - newline-delimited stdio framing in front of the rmcp service
//! - `tools/` - tool definitions for discovery
//! - `handlers/` - tool execution handlers
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use okta_mcp_server::{OktaConfig, OktaMcpServer};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OktaConfig::new("dev-123456.okta.com", "00token");
//!     let server = OktaMcpServer::from_config(&config)?;
//!
//!     let response = server
//!         .execute_tool("okta_list_users_make_request", json!({ "limit": 5 }))
//!         .await?;
//!     println!("{}", response.first_text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod handlers;
pub mod params;
pub mod protocol;
pub mod tools;
pub mod transport;
pub mod validation;


pub use self::core::{
    McpServerInfo, OktaMcpServer, SanitizePolicy, ToolContent, ToolResponse, collect_sanitized,
};
