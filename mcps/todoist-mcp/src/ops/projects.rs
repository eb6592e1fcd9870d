//! Project operations

use super::{recover, Outcome};
use crate::colors::color_id;
use crate::todoist::TodoistApi;
use crate::tree::{build_forest, Forest};
use crate::types::{NewProject, Project};

/// List all projects as a hierarchy
pub async fn list_projects(api: &dyn TodoistApi) -> Outcome<Forest<Project>> {
    let projects = api
        .list_projects()
        .await
        .map_err(|e| recover("list_projects", e))?;
    Ok(build_forest(projects))
}

pub async fn get_project_details(api: &dyn TodoistApi, project_id: &str) -> Outcome<Project> {
    api.get_project(project_id)
        .await
        .map_err(|e| recover("get_project_details", e))
}

/// Create a project; an unknown color name leaves the color unset
pub async fn create_project(
    api: &dyn TodoistApi,
    name: &str,
    parent_id: Option<String>,
    color: Option<&str>,
    is_favorite: Option<bool>,
) -> Outcome<Project> {
    let project = NewProject {
        name: name.to_string(),
        parent_id,
        color: color.and_then(color_id),
        is_favorite,
    };

    api.add_project(&project)
        .await
        .map_err(|e| recover("create_project", e))
}

pub async fn delete_project(api: &dyn TodoistApi, project_id: &str) -> Outcome<String> {
    api.delete_project(project_id)
        .await
        .map_err(|e| recover("delete_project", e))?;
    Ok(format!("Deleted project {}", project_id))
}
