//! Protocol-level error helpers
//!
//! These build `McpError`s, which fail the tool call itself. Use them for
//! malformed input the schema could not catch. Failures of the underlying
//! service belong in the tool result instead (see [`crate::json_error`]).

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an invalid params error with a message
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::invalid_params;
///
/// if !(1..=4).contains(&priority) {
///     return Err(invalid_params("priority must be between 1 and 4"));
/// }
/// ```
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
