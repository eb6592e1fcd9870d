//! Todoist entity and request types
//!
//! Entities mirror the REST API's JSON. Fields the service adds that are not
//! modelled here are kept verbatim in `extra`, so nothing the service sends
//! is lost when a result is re-serialized for a client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tree::Hierarchical;

// ============================================================================
// Entities
// ============================================================================

/// Due date as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Due {
    pub date: String,
    /// Human-readable form, e.g. "every monday"
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A task as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub added_by_uid: Option<String>,
    #[serde(default)]
    pub assigned_by_uid: Option<String>,
    #[serde(default)]
    pub responsible_uid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public projection of a [`Task`]
///
/// Drops the user-identifying fields; everything else passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: String,
    pub content: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            content: task.content,
            description: task.description,
            project_id: task.project_id,
            section_id: task.section_id,
            parent_id: task.parent_id,
            labels: task.labels,
            priority: task.priority,
            due: task.due,
            extra: task.extra,
        }
    }
}

impl Hierarchical for TaskView {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

/// A project, personal or workspace-shared
///
/// Workspace projects carry `workspace_id` and are grouped by folders rather
/// than nested, so their `parent_id` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_inbox_project: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hierarchical for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

/// A personal label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A saved filter
///
/// The REST API cannot list filters, so these are never populated; the type
/// exists so `get_filters` has a concrete element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    pub name: String,
    pub query: String,
}

// ============================================================================
// Requests
// ============================================================================

/// Criteria for listing tasks
///
/// `None` means "no constraint". Empty strings are treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub label: Option<String>,
    pub project_id: Option<String>,
    pub filter: Option<String>,
}

impl TaskQuery {
    pub fn project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Default::default()
        }
    }

    /// Drop options that are set but empty
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            label: keep(self.label),
            project_id: keep(self.project_id),
            filter: keep(self.filter),
        }
    }
}

/// Fields for creating a task
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTask {
    pub content: String,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Partial update for a task; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.due_string.is_none()
            && self.priority.is_none()
            && self.labels.is_none()
    }
}

/// Fields for creating a project
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Numeric color id, see [`crate::colors`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// Fields for creating a label
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewLabel {
    pub name: String,
    /// Numeric color id, see [`crate::colors`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}
