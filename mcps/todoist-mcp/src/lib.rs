//! Todoist MCP Library
//!
//! Todoist tasks, projects and labels as MCP tools and a CLI, over the
//! Todoist REST API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todoist_mcp::{ops, RestClient, TaskQuery};
//!
//! let client = RestClient::new(config.api)?;
//! let forest = ops::list_tasks(&client, TaskQuery::label("next")).await?;
//! ```
//!
//! # Features
//! - Tasks: add, list (as a subtask tree), move, update, delete, complete
//! - Projects: list (as a tree), details, create, delete
//! - Labels: list, create; filters (always empty)
//! - Weekly review: inbox, overdue, waiting-for, projects, someday/maybe
//!
//! # Configuration
//! Set `TODOIST_API_TOKEN`, or configure in `~/.binks/todoist.toml`

pub mod cli;
pub mod colors;
pub mod config;
pub mod ops;
pub mod params;
pub mod review;
pub mod server;
pub mod todoist;
pub mod tree;
pub mod types;

// Re-export main server type
pub use server::TodoistMcpServer;

// Re-export the types most callers need
pub use ops::{OperationError, Outcome};
pub use review::{weekly_review, ReviewReport, ReviewScope};
pub use todoist::{ApiError, RestClient, TodoistApi};
pub use tree::{build_forest, Forest, Hierarchical, Node};
pub use types::*;
