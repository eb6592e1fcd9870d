//! Task operations

use serde::Serialize;
use tracing::debug;

use super::{recover, OperationError, Outcome};
use crate::todoist::TodoistApi;
use crate::tree::{build_forest, Forest};
use crate::types::{NewTask, TaskQuery, TaskUpdate, TaskView};

/// List tasks and rebuild their subtask hierarchy
pub async fn list_tasks(api: &dyn TodoistApi, query: TaskQuery) -> Outcome<Forest<TaskView>> {
    let query = query.normalized();
    let tasks = api
        .list_tasks(&query)
        .await
        .map_err(|e| recover("list_tasks", e))?;

    debug!(count = tasks.len(), "tasks fetched");
    Ok(build_forest(tasks.into_iter().map(TaskView::from).collect()))
}

/// Create a task
pub async fn add_task(api: &dyn TodoistApi, task: NewTask) -> Outcome<TaskView> {
    api.add_task(&task)
        .await
        .map(TaskView::from)
        .map_err(|e| recover("add_task", e))
}

/// Move a task into another project
pub async fn process_task(api: &dyn TodoistApi, task_id: &str, project_id: &str) -> Outcome<String> {
    api.move_tasks(&[task_id.to_string()], project_id)
        .await
        .map_err(|e| recover("process_task", e))?;
    Ok(format!("Task {} processed.", task_id))
}

/// Apply a partial update to a task
pub async fn update_task(api: &dyn TodoistApi, task_id: &str, update: TaskUpdate) -> Outcome<String> {
    api.update_task(task_id, &update)
        .await
        .map_err(|e| recover("update_task", e))?;
    Ok(format!("Task {} updated.", task_id))
}

/// Delete a task
///
/// Not idempotent: deleting an already deleted task reports the service's
/// error.
pub async fn delete_task(api: &dyn TodoistApi, task_id: &str) -> Outcome<String> {
    api.delete_task(task_id)
        .await
        .map_err(|e| recover("delete_task", e))?;
    Ok(format!("Deleted task {}", task_id))
}

/// Complete a task, returning how it looked before completion
pub async fn complete_task(api: &dyn TodoistApi, task_id: &str) -> Outcome<TaskView> {
    let task = api
        .get_task(task_id)
        .await
        .map_err(|e| recover("complete_task", e))?;

    let closed = api
        .close_task(task_id)
        .await
        .map_err(|e| recover("complete_task", e))?;

    if !closed {
        return Err(OperationError::new(format!(
            "Failed to complete task {}",
            task_id
        )));
    }

    Ok(task.into())
}

/// Result of completing one task in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub task_id: String,
    pub result: Outcome<TaskView>,
}

/// Complete several tasks, one request at a time
///
/// Each id gets its own outcome, in input order. A failure never stops the
/// remaining ids from being attempted.
pub async fn complete_tasks(api: &dyn TodoistApi, task_ids: &[String]) -> Vec<CompletionOutcome> {
    let mut outcomes = Vec::with_capacity(task_ids.len());

    for task_id in task_ids {
        let result = complete_task(api, task_id).await;
        outcomes.push(CompletionOutcome {
            task_id: task_id.clone(),
            result,
        });
    }

    outcomes
}

/// Per-task line of a [`CompletionReport`]
#[derive(Debug, Serialize)]
pub struct CompletionLine {
    pub task_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<CompletionOutcome> for CompletionLine {
    fn from(outcome: CompletionOutcome) -> Self {
        match outcome.result {
            Ok(task) => Self {
                task_id: outcome.task_id,
                success: true,
                task: Some(task),
                error: None,
            },
            Err(OperationError { error }) => Self {
                task_id: outcome.task_id,
                success: false,
                task: None,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Batch completion results with a success/failure tally
#[derive(Debug, Serialize)]
pub struct CompletionReport {
    pub results: Vec<CompletionLine>,
    pub summary: CompletionSummary,
}

impl CompletionReport {
    pub fn new(outcomes: Vec<CompletionOutcome>) -> Self {
        let results: Vec<CompletionLine> = outcomes.into_iter().map(Into::into).collect();
        let successful = results.iter().filter(|line| line.success).count();
        let summary = CompletionSummary {
            total: results.len(),
            successful,
            failed: results.len() - successful,
        };
        Self { results, summary }
    }
}
