//! Parameter types for Todoist MCP tools

mod label;
mod project;
mod task;

pub use label::*;
pub use project::*;
pub use task::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}
