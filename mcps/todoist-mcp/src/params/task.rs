//! Task-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ops::OperationError;
use crate::types::{NewTask, TaskQuery, TaskUpdate};

/// Parameters for creating a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddTaskParams {
    #[schemars(description = "Task content (the title)")]
    pub content: String,

    #[schemars(description = "Labels to attach, without the leading '@'")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "Project to create the task in. Defaults to the inbox")]
    pub project_id: Option<String>,

    #[schemars(description = "Parent task ID, to create a subtask")]
    pub parent_id: Option<String>,
}

impl From<AddTaskParams> for NewTask {
    fn from(params: AddTaskParams) -> Self {
        Self {
            content: params.content,
            labels: params.labels.unwrap_or_default(),
            project_id: params.project_id,
            parent_id: params.parent_id,
        }
    }
}

/// Parameters for listing tasks
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Only tasks carrying this label")]
    pub label: Option<String>,

    #[schemars(description = "Only tasks in this project")]
    pub project_id: Option<String>,

    #[schemars(description = "Todoist filter query (e.g., 'today', 'overdue', 'p1 & #Work')")]
    pub filter: Option<String>,
}

impl From<ListTasksParams> for TaskQuery {
    fn from(params: ListTasksParams) -> Self {
        Self {
            label: params.label,
            project_id: params.project_id,
            filter: params.filter,
        }
    }
}

/// Parameters for moving a task to another project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProcessTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,

    #[schemars(description = "Destination project ID")]
    pub project_id: String,
}

/// Parameters for deleting a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

/// Parameters for updating a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,

    #[schemars(description = "New content")]
    pub content: Option<String>,

    #[schemars(description = "Due date in natural language (e.g., 'tomorrow', 'every friday')")]
    pub due_string: Option<String>,

    #[schemars(description = "Priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<u8>,

    #[schemars(description = "Replacement label list")]
    pub labels: Option<Vec<String>>,
}

impl UpdateTaskParams {
    pub fn into_parts(self) -> (String, TaskUpdate) {
        let update = TaskUpdate {
            content: self.content,
            due_string: self.due_string,
            priority: self.priority,
            labels: self.labels,
        };
        (self.task_id, update)
    }
}

/// Parameters for completing one task or a batch
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompleteTaskParams {
    #[schemars(description = "ID of a single task to complete")]
    pub task_id: Option<String>,

    #[schemars(description = "IDs of several tasks to complete, processed in order")]
    pub task_ids: Option<Vec<String>>,
}

impl CompleteTaskParams {
    /// The ids to complete; exactly one of the two fields must be given
    pub fn into_ids(self) -> Result<Vec<String>, OperationError> {
        match (self.task_id, self.task_ids) {
            (Some(id), None) => Ok(vec![id]),
            (None, Some(ids)) if ids.is_empty() => Err(OperationError::new(
                "Invalid input: 'task_ids' array cannot be empty. Provide at least one task ID.",
            )),
            (None, Some(ids)) => Ok(ids),
            _ => Err(OperationError::new(
                "Invalid input: Must provide either 'task_id' for single task completion or \
                 'task_ids' for multiple task completion, but not both or neither.",
            )),
        }
    }
}
