//! Project-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for viewing a project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectDetailsParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

/// Parameters for creating a project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Project name")]
    pub name: String,

    #[schemars(description = "ID of the parent project, to nest this one under it")]
    pub parent_id: Option<String>,

    #[schemars(
        description = "Color name: berry_red, red, orange, yellow, lime_green, green, mint_green, teal, sky_blue, blue, grape, violet, lavender, magenta, salmon, charcoal, grey, taupe"
    )]
    pub color: Option<String>,

    #[schemars(description = "Mark the project as a favorite")]
    pub is_favorite: Option<bool>,
}

/// Parameters for deleting a project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

/// Parameters for the weekly review
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct WeeklyReviewParams {
    #[schemars(description = "Inbox project ID. Defaults to the configured inbox")]
    pub inbox_project_id: Option<String>,

    #[schemars(description = "Someday/maybe project ID. Defaults to the configured project")]
    pub someday_maybe_project_id: Option<String>,
}
