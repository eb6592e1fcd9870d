//! MCP Server implementation
//!
//! Exposes the entity operations and the weekly review as MCP tools.
//! Failures of the Todoist service are returned as tool results flagged with
//! `is_error` and a `{"error": ...}` body; only malformed input fails the
//! protocol call itself.

use std::sync::Arc;

use mcp_common::{invalid_params, json_error, json_success, text_success, McpResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde::Serialize;

use crate::config::{Config, ReviewConfig};
use crate::ops::{self, CompletionReport, OperationError, Outcome};
use crate::params::*;
use crate::review;
use crate::todoist::{RestClient, TodoistApi};
use crate::types::TaskQuery;

/// The main Todoist MCP Server
#[derive(Clone)]
pub struct TodoistMcpServer {
    api: Arc<dyn TodoistApi>,
    review: ReviewConfig,
    tool_router: ToolRouter<Self>,
}

/// Render an operation outcome as structured JSON
fn respond<T: Serialize>(outcome: Outcome<T>) -> McpResult<CallToolResult> {
    match outcome {
        Ok(value) => json_success(&value),
        Err(err) => json_error(&err),
    }
}

/// Render a confirmation outcome as plain text
fn confirm(outcome: Outcome<String>) -> McpResult<CallToolResult> {
    match outcome {
        Ok(message) => Ok(text_success(message)),
        Err(err) => json_error(&err),
    }
}

// ============================================================================
// Task Tools
// ============================================================================

#[tool_router]
impl TodoistMcpServer {
    #[tool(description = "Add a new task to Todoist, optionally with labels, a project, or a parent task")]
    async fn add_task(
        &self,
        Parameters(params): Parameters<AddTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("add_task: {}", params.content);
        respond(ops::add_task(self.api.as_ref(), params.into()).await)
    }

    #[tool(
        description = "List Todoist tasks as a tree (subtasks nested under 'children'), optionally filtered by label, project, or filter query"
    )]
    async fn list_tasks(
        &self,
        Parameters(params): Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = TaskQuery::from(params);
        tracing::info!(?query, "list_tasks");
        respond(ops::list_tasks(self.api.as_ref(), query).await)
    }

    #[tool(description = "Move a task to a different project")]
    async fn process_task(
        &self,
        Parameters(params): Parameters<ProcessTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("process_task: {} -> {}", params.task_id, params.project_id);
        confirm(ops::process_task(self.api.as_ref(), &params.task_id, &params.project_id).await)
    }

    #[tool(description = "Delete a task from Todoist")]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("delete_task: {}", params.task_id);
        confirm(ops::delete_task(self.api.as_ref(), &params.task_id).await)
    }

    #[tool(description = "Update a task's content, due date, priority, or labels. Only given fields change")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(priority) = params.priority {
            if !(1..=4).contains(&priority) {
                return Err(invalid_params("priority must be between 1 and 4"));
            }
        }

        let (task_id, update) = params.into_parts();
        tracing::info!("update_task: {}", task_id);
        confirm(ops::update_task(self.api.as_ref(), &task_id, update).await)
    }

    #[tool(description = "Mark a task (task_id) or several tasks (task_ids) as complete in Todoist")]
    async fn complete_task(
        &self,
        Parameters(params): Parameters<CompleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let ids = match params.into_ids() {
            Ok(ids) => ids,
            Err(err) => return json_error(&err),
        };

        tracing::info!(count = ids.len(), "complete_task");
        let outcomes = ops::complete_tasks(self.api.as_ref(), &ids).await;
        json_success(&CompletionReport::new(outcomes))
    }
}

// ============================================================================
// Project, Label & Review Tools
// ============================================================================

#[tool_router(router = catalog_tool_router)]
impl TodoistMcpServer {
    #[tool(description = "Get details for a specific project")]
    async fn get_project_details(
        &self,
        Parameters(params): Parameters<ProjectDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(ops::get_project_details(self.api.as_ref(), &params.project_id).await)
    }

    #[tool(description = "List all projects as a tree (sub-projects nested under 'children')")]
    async fn get_projects(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(ops::list_projects(self.api.as_ref()).await)
    }

    #[tool(
        description = "Create a new project. The color is a name from the list in the 'color' parameter; unknown names leave the color unset"
    )]
    async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("create_project: {}", params.name);
        respond(
            ops::create_project(
                self.api.as_ref(),
                &params.name,
                params.parent_id,
                params.color.as_deref(),
                params.is_favorite,
            )
            .await,
        )
    }

    #[tool(description = "Delete a project from Todoist")]
    async fn delete_project(
        &self,
        Parameters(params): Parameters<DeleteProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("delete_project: {}", params.project_id);
        confirm(ops::delete_project(self.api.as_ref(), &params.project_id).await)
    }

    #[tool(description = "Get all personal labels")]
    async fn get_labels(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(ops::get_labels(self.api.as_ref()).await)
    }

    #[tool(
        description = "Create a new label. The color is a name from the list in the 'color' parameter; unknown names leave the color unset"
    )]
    async fn create_label(
        &self,
        Parameters(params): Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("create_label: {}", params.name);
        respond(
            ops::create_label(
                self.api.as_ref(),
                &params.name,
                params.color.as_deref(),
                params.is_favorite,
            )
            .await,
        )
    }

    #[tool(
        description = "Get saved filters. Note: the Todoist API cannot list filters, so this is always empty; pass a filter query to list_tasks instead"
    )]
    async fn get_filters(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(ops::get_filters(self.api.as_ref()).await)
    }

    #[tool(
        description = "GTD weekly review: inbox, overdue, waiting-for, projects, and someday/maybe in one report. Project IDs default to the configured ones"
    )]
    async fn weekly_review(
        &self,
        Parameters(params): Parameters<WeeklyReviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let scope = match self
            .review
            .scope(params.inbox_project_id, params.someday_maybe_project_id)
        {
            Ok(scope) => scope,
            Err(err) => return json_error(&OperationError::new(err.to_string())),
        };

        tracing::info!(?scope, "weekly_review");
        json_success(&review::weekly_review(self.api.as_ref(), &scope).await)
    }
}

// ============================================================================
// Router Composition & Server Initialization
// ============================================================================

impl TodoistMcpServer {
    pub fn new(api: Arc<dyn TodoistApi>, review: ReviewConfig) -> Self {
        Self {
            api,
            review,
            tool_router: Self::tool_router() + Self::catalog_tool_router(),
        }
    }

    /// Build a server talking to the real service, configured from file and
    /// environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load()?;
        tracing::info!("Todoist API: {}", config.api.base_url);

        let client = RestClient::new(config.api)?;
        Ok(Self::new(Arc::new(client), config.review))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TodoistMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Todoist MCP Server - provides tools for managing Todoist tasks, \
                 projects, and labels, plus a GTD weekly review. Task and project \
                 listings are trees: subtasks and sub-projects are nested under \
                 'children'. Requires TODOIST_API_TOKEN."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
