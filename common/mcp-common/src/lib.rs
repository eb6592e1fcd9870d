//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides the plumbing every MCP server in the workspace needs:
//!
//! - **Initialization**: [`init_tracing`] and the `serve_stdio!` macro
//! - **Results**: helpers for building `CallToolResult` payloads, including
//!   tool-level error payloads that keep the protocol call itself successful
//! - **Errors**: constructors for protocol-level `McpError`s
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, json_success};
//!
//! // In main.rs
//! serve_stdio!("my_mcp", MyServer::from_env());
//!
//! // In tool implementations
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     json_success(&get_some_data())
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, invalid_params, McpResult};
pub use init::{init_tracing, init_tracing_with_level};
pub use result::{json_error, json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
