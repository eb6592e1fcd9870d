//! Result helpers for MCP tool responses
//!
//! Tools in this workspace answer with pretty-printed JSON text. A failure of
//! the service behind a tool is still a *successful* protocol call: the
//! payload is returned with `is_error` set so the client can render it.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::internal_error;

fn to_pretty_json<T: Serialize>(data: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(data).map_err(|e| internal_error(e.to_string()))
}

/// Create a successful JSON response from any serializable data
///
/// # Returns
///
/// * `Ok(CallToolResult)` with pretty-printed JSON content
/// * `Err(McpError)` if serialization fails
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(to_pretty_json(data)?)]))
}

/// Create a tool-level error response from any serializable data
///
/// The protocol call succeeds; the result is flagged with `is_error`.
///
/// ```rust,ignore
/// json_error(&serde_json::json!({ "error": "Task not found" }))
/// ```
pub fn json_error<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(to_pretty_json(data)?)]))
}

/// Create a successful plain text response
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
