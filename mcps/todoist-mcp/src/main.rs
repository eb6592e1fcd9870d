//! Todoist MCP Server
//!
//! Exposes Todoist tasks, projects, labels and a GTD weekly review as MCP
//! tools over stdio.
//!
//! # Configuration
//! Set `TODOIST_API_TOKEN` (and, for the weekly review,
//! `TODOIST_INBOX_PROJECT_ID` / `TODOIST_SOMEDAY_PROJECT_ID`), or configure
//! in `~/.binks/todoist.toml`

use todoist_mcp::TodoistMcpServer;

mcp_common::serve_stdio!("todoist_mcp", TodoistMcpServer::from_env());
