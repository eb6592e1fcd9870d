//! HTTP client for the Todoist REST API
//!
//! Implements [`TodoistApi`] with reqwest. Listings are paginated by the
//! service (`results` + `next_cursor`); they are followed to the end so the
//! caller always sees a complete result set.
//! See: https://developer.todoist.com/api/v1/

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::TodoistApi;
use crate::config::ApiConfig;
use crate::types::{Label, NewLabel, NewProject, NewTask, Project, Task, TaskQuery, TaskUpdate};

const PAGE_LIMIT: &str = "200";

/// One page of a listing endpoint
#[derive(Debug, Deserialize)]
struct Page<T> {
    results: Vec<T>,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Todoist REST client
pub struct RestClient {
    client: Client,
    config: ApiConfig,
}

impl RestClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("todoist-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        self.client
            .request(method, url)
            .bearer_auth(&self.config.token)
    }

    #[instrument(skip_all)]
    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "todoist response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), message = %message, "todoist request rejected");
            return Err(ApiError::status(status.as_u16(), message));
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<Vec<T>> {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen = HashSet::new();

        loop {
            let mut request = self
                .request(Method::GET, path)
                .query(params)
                .query(&[("limit", PAGE_LIMIT)]);
            if let Some(ref cursor) = cursor {
                request = request.query(&[("cursor", cursor)]);
            }

            let page: Page<T> = self.fetch(request).await?;
            items.extend(page.results);

            match page.next_cursor {
                Some(next) if !next.is_empty() => {
                    if !seen.insert(next.clone()) {
                        warn!(path, cursor = %next, "pagination cursor repeated, stopping");
                        break;
                    }
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        debug!(path, count = items.len(), "listing complete");
        Ok(items)
    }
}

#[async_trait]
impl TodoistApi for RestClient {
    async fn list_tasks(&self, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        if let Some(ref filter) = query.filter {
            if query.label.is_some() || query.project_id.is_some() {
                warn!("label/project constraints are ignored when a filter query is given");
            }
            return self
                .fetch_all("tasks/filter", &[("query", filter.clone())])
                .await;
        }

        let mut params = Vec::new();
        if let Some(ref project_id) = query.project_id {
            params.push(("project_id", project_id.clone()));
        }
        if let Some(ref label) = query.label {
            params.push(("label", label.clone()));
        }

        self.fetch_all("tasks", &params).await
    }

    async fn get_task(&self, id: &str) -> ApiResult<Task> {
        self.fetch(self.request(Method::GET, &format!("tasks/{}", id)))
            .await
    }

    /// A refusal comes back as a non-2xx status and surfaces as an error, so
    /// a call that returns at all has closed the task.
    async fn close_task(&self, id: &str) -> ApiResult<bool> {
        self.execute(self.request(Method::POST, &format!("tasks/{}/close", id)))
            .await?;
        Ok(true)
    }

    async fn add_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.fetch(self.request(Method::POST, "tasks").json(task))
            .await
    }

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> ApiResult<()> {
        self.execute(
            self.request(Method::POST, &format!("tasks/{}", id))
                .json(update),
        )
        .await?;
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, &format!("tasks/{}", id)))
            .await?;
        Ok(())
    }

    async fn move_tasks(&self, ids: &[String], project_id: &str) -> ApiResult<()> {
        // The REST API moves one task per request.
        for id in ids {
            self.execute(
                self.request(Method::POST, &format!("tasks/{}/move", id))
                    .json(&json!({ "project_id": project_id })),
            )
            .await?;
        }
        Ok(())
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.fetch_all("projects", &[]).await
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.fetch(self.request(Method::GET, &format!("projects/{}", id)))
            .await
    }

    async fn add_project(&self, project: &NewProject) -> ApiResult<Project> {
        self.fetch(self.request(Method::POST, "projects").json(project))
            .await
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, &format!("projects/{}", id)))
            .await?;
        Ok(())
    }

    async fn list_labels(&self) -> ApiResult<Vec<Label>> {
        self.fetch_all("labels", &[]).await
    }

    async fn add_label(&self, label: &NewLabel) -> ApiResult<Label> {
        self.fetch(self.request(Method::POST, "labels").json(label))
            .await
    }
}
