//! MCP integration handlers
//!
//! One handler per tool, organized by functional area. Every handler follows
//! the same sequence: validate arguments, call the identity provider, then
//! wrap the result in a [`ToolResponse`](super::core::ToolResponse). API
//! failures surface as `Failed to <operation>: <message>`.

pub mod application_ops;
pub mod group_crud;
pub mod group_queries;
pub mod user_crud;
pub mod user_queries;

// Re-export handler functions for convenience
pub use application_ops::*;
pub use group_crud::*;
pub use group_queries::*;
pub use user_crud::*;
pub use user_queries::*;
