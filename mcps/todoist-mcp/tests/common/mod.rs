//! Scripted in-memory Todoist for integration tests
//!
//! Responses are configured up front; every call is recorded so tests can
//! check what was sent and in which order.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use todoist_mcp::todoist::{ApiError, ApiResult, TodoistApi};
use todoist_mcp::{Label, NewLabel, NewProject, NewTask, Project, Task, TaskQuery, TaskUpdate};

pub fn task(id: &str, content: &str, parent_id: Option<&str>) -> Task {
    serde_json::from_value(json!({
        "id": id,
        "content": content,
        "parent_id": parent_id,
        "user_id": "user-1",
        "priority": 1
    }))
    .unwrap()
}

pub fn project(id: &str, name: &str, parent_id: Option<&str>) -> Project {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "parent_id": parent_id
    }))
    .unwrap()
}

pub fn label(id: &str, name: &str) -> Label {
    serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
}

fn server_error(message: &str) -> ApiError {
    ApiError::status(500, message)
}

fn not_found(what: &str) -> ApiError {
    ApiError::status(404, format!("{} not found", what))
}

#[derive(Default)]
pub struct FakeTodoist {
    listings: Vec<(TaskQuery, Result<Vec<Task>, String>)>,
    tasks: HashMap<String, Task>,
    refuse_close: HashSet<String>,
    projects: Option<Result<Vec<Project>, String>>,
    labels: Vec<Label>,
    fail_all: Option<String>,

    pub calls: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<TaskQuery>>,
    pub added_tasks: Mutex<Vec<NewTask>>,
    pub updates: Mutex<Vec<(String, TaskUpdate)>>,
    pub moves: Mutex<Vec<(Vec<String>, String)>>,
    pub added_projects: Mutex<Vec<NewProject>>,
    pub added_labels: Mutex<Vec<NewLabel>>,
    deleted: Mutex<HashSet<String>>,

    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl FakeTodoist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with these tasks
    pub fn with_listing(mut self, query: TaskQuery, tasks: Vec<Task>) -> Self {
        self.listings.push((query, Ok(tasks)));
        self
    }

    /// Fail `query` with this message
    pub fn with_failing_listing(mut self, query: TaskQuery, message: &str) -> Self {
        self.listings.push((query, Err(message.to_string())));
        self
    }

    /// Make a task available to `get_task`
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.insert(task.id.clone(), task);
        self
    }

    /// `close_task` answers `false` for this id
    pub fn refusing_close(mut self, id: &str) -> Self {
        self.refuse_close.insert(id.to_string());
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = Some(Ok(projects));
        self
    }

    pub fn with_failing_projects(mut self, message: &str) -> Self {
        self.projects = Some(Err(message.to_string()));
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    /// Every call fails with this message
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_all = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_all {
            Some(ref message) => Err(server_error(message)),
            None => Ok(()),
        }
    }

    /// Track overlapping requests across an await point
    async fn round_trip(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TodoistApi for FakeTodoist {
    async fn list_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        self.record("list_tasks".to_string())?;
        self.queries.lock().unwrap().push(query.clone());
        self.round_trip().await;

        match self.listings.iter().find(|(known, _)| known == query) {
            Some((_, Ok(tasks))) => Ok(tasks.clone()),
            Some((_, Err(message))) => Err(server_error(message)),
            None => Ok(Vec::new()),
        }
    }

    async fn get_task(&self, id: &str) -> ApiResult<Task> {
        self.record(format!("get_task:{}", id))?;
        self.round_trip().await;

        self.tasks.get(id).cloned().ok_or_else(|| not_found("Task"))
    }

    async fn close_task(&self, id: &str) -> ApiResult<bool> {
        self.record(format!("close_task:{}", id))?;
        self.round_trip().await;

        Ok(!self.refuse_close.contains(id))
    }

    async fn add_task(&self, new_task: &NewTask) -> ApiResult<Task> {
        self.record("add_task".to_string())?;
        self.added_tasks.lock().unwrap().push(new_task.clone());

        let mut created = task("new-1", &new_task.content, new_task.parent_id.as_deref());
        created.labels = new_task.labels.clone();
        created.project_id = new_task.project_id.clone();
        Ok(created)
    }

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> ApiResult<()> {
        self.record(format!("update_task:{}", id))?;
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), update.clone()));
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.record(format!("delete_task:{}", id))?;
        if !self.deleted.lock().unwrap().insert(id.to_string()) {
            return Err(not_found("Task"));
        }
        Ok(())
    }

    async fn move_tasks(&self, ids: &[String], project_id: &str) -> ApiResult<()> {
        self.record("move_tasks".to_string())?;
        self.moves
            .lock()
            .unwrap()
            .push((ids.to_vec(), project_id.to_string()));
        Ok(())
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.record("list_projects".to_string())?;
        self.round_trip().await;

        match self.projects {
            Some(Ok(ref projects)) => Ok(projects.clone()),
            Some(Err(ref message)) => Err(server_error(message)),
            None => Ok(Vec::new()),
        }
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.record(format!("get_project:{}", id))?;

        self.projects
            .as_ref()
            .and_then(|projects| projects.as_ref().ok())
            .and_then(|projects| projects.iter().find(|p| p.id == id).cloned())
            .ok_or_else(|| not_found("Project"))
    }

    async fn add_project(&self, new_project: &NewProject) -> ApiResult<Project> {
        self.record("add_project".to_string())?;
        self.added_projects.lock().unwrap().push(new_project.clone());
        Ok(project(
            "new-project",
            &new_project.name,
            new_project.parent_id.as_deref(),
        ))
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.record(format!("delete_project:{}", id))?;
        Ok(())
    }

    async fn list_labels(&self) -> ApiResult<Vec<Label>> {
        self.record("list_labels".to_string())?;
        Ok(self.labels.clone())
    }

    async fn add_label(&self, new_label: &NewLabel) -> ApiResult<Label> {
        self.record("add_label".to_string())?;
        self.added_labels.lock().unwrap().push(new_label.clone());
        Ok(label("new-label", &new_label.name))
    }
}
