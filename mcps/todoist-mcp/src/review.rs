//! GTD weekly review
//!
//! Gathers everything a weekly review walks through (inbox, overdue,
//! waiting-for, projects, someday/maybe) into a single report. The five
//! listings are independent, so they run concurrently; each lands in its own
//! field and fails on its own.

use serde::Serialize;
use tracing::info;

use crate::ops::{list_projects, list_tasks, OperationError, Outcome};
use crate::todoist::TodoistApi;
use crate::tree::Forest;
use crate::types::{Project, TaskQuery, TaskView};

/// Label marking tasks that wait on someone else
pub const WAITING_FOR_LABEL: &str = "waiting_for_💤";

/// Filter query for overdue tasks
pub const OVERDUE_FILTER: &str = "overdue";

/// Where the review looks
///
/// The project ids come from configuration; they are never looked up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewScope {
    pub inbox_project_id: String,
    pub someday_maybe_project_id: String,
    pub waiting_for_label: String,
}

/// One field of the report: the listing, or why it could not be fetched
///
/// Serializes as the listing itself or as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ready(T),
    Failed(OperationError),
}

impl<T> Section<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            Section::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

impl<T> From<Outcome<T>> for Section<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Ok(value) => Section::Ready(value),
            Err(err) => Section::Failed(err),
        }
    }
}

/// Weekly review report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewReport {
    pub inbox_tasks: Section<Forest<TaskView>>,
    pub overdue_tasks: Section<Forest<TaskView>>,
    pub waiting_for_tasks: Section<Forest<TaskView>>,
    pub projects: Section<Forest<Project>>,
    pub someday_maybe_tasks: Section<Forest<TaskView>>,
}

impl ReviewReport {
    pub fn failed_sections(&self) -> usize {
        [
            self.inbox_tasks.is_failed(),
            self.overdue_tasks.is_failed(),
            self.waiting_for_tasks.is_failed(),
            self.projects.is_failed(),
            self.someday_maybe_tasks.is_failed(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

/// Build the weekly review report
pub async fn weekly_review(api: &dyn TodoistApi, scope: &ReviewScope) -> ReviewReport {
    let (inbox, overdue, waiting, projects, someday) = tokio::join!(
        scoped_tasks(api, "inbox_project_id", &scope.inbox_project_id, |id| {
            TaskQuery::project(id)
        }),
        list_tasks(api, TaskQuery::filter(OVERDUE_FILTER)),
        scoped_tasks(api, "waiting_for_label", &scope.waiting_for_label, |label| {
            TaskQuery::label(label)
        }),
        list_projects(api),
        scoped_tasks(
            api,
            "someday_maybe_project_id",
            &scope.someday_maybe_project_id,
            |id| TaskQuery::project(id),
        ),
    );

    let report = ReviewReport {
        inbox_tasks: inbox.into(),
        overdue_tasks: overdue.into(),
        waiting_for_tasks: waiting.into(),
        projects: projects.into(),
        someday_maybe_tasks: someday.into(),
    };

    info!(failed = report.failed_sections(), "weekly review assembled");
    report
}

/// List the tasks selected by one scope value
///
/// An empty value fails the section instead of listing every task.
async fn scoped_tasks(
    api: &dyn TodoistApi,
    setting: &str,
    value: &str,
    query: impl FnOnce(&str) -> TaskQuery,
) -> Outcome<Forest<TaskView>> {
    if value.is_empty() {
        return Err(OperationError::new(format!("{} is empty", setting)));
    }
    list_tasks(api, query(value)).await
}
