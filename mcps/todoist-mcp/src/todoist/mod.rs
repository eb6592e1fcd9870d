//! Todoist service access
//!
//! [`TodoistApi`] is the seam between the operations in this crate and the
//! remote service. [`RestClient`] implements it over HTTP; tests substitute
//! scripted fakes.

use async_trait::async_trait;

use crate::types::{Label, NewLabel, NewProject, NewTask, Project, Task, TaskQuery, TaskUpdate};

pub mod client;
pub mod error;

pub use client::RestClient;
pub use error::{ApiError, ApiResult};

/// Remote task service
///
/// Every method is one round trip (or one paginated listing) and may fail
/// with an [`ApiError`].
#[async_trait]
pub trait TodoistApi: Send + Sync {
    /// List tasks matching the query; unset options are not sent
    async fn list_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>>;

    async fn get_task(&self, id: &str) -> ApiResult<Task>;

    /// Mark a task complete; `false` means the service refused
    async fn close_task(&self, id: &str) -> ApiResult<bool>;

    async fn add_task(&self, task: &NewTask) -> ApiResult<Task>;

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> ApiResult<()>;

    async fn delete_task(&self, id: &str) -> ApiResult<()>;

    /// Move a batch of tasks to another project
    async fn move_tasks(&self, ids: &[String], project_id: &str) -> ApiResult<()>;

    async fn list_projects(&self) -> ApiResult<Vec<Project>>;

    async fn get_project(&self, id: &str) -> ApiResult<Project>;

    async fn add_project(&self, project: &NewProject) -> ApiResult<Project>;

    async fn delete_project(&self, id: &str) -> ApiResult<()>;

    async fn list_labels(&self) -> ApiResult<Vec<Label>>;

    async fn add_label(&self, label: &NewLabel) -> ApiResult<Label>;
}
