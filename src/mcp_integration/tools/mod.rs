//! MCP tool definitions
//!
//! Tool schemas are organized by functional area:
//! - [`user_schemas`] - User lifecycle and listing
//! - [`group_schemas`] - Group listing, creation and membership
//! - [`application_schemas`] - Application listing, assignment and lifecycle
//!
//! Each definition carries the tool's wire name, a description, and a JSON
//! Schema generated from the argument struct in `params`. The definitions are
//! advertised through `tools/list`; the handlers parse calls against the same
//! schemas.

pub mod application_schemas;
pub mod group_schemas;
pub mod user_schemas;

// Re-export commonly used schema functions for convenience
pub use application_schemas::*;
pub use group_schemas::*;
pub use user_schemas::*;
