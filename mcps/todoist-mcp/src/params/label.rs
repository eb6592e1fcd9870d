//! Label-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for creating a label
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Label name")]
    pub name: String,

    #[schemars(
        description = "Color name: berry_red, red, orange, yellow, lime_green, green, mint_green, teal, sky_blue, blue, grape, violet, lavender, magenta, salmon, charcoal, grey, taupe"
    )]
    pub color: Option<String>,

    #[schemars(description = "Mark the label as a favorite")]
    pub is_favorite: Option<bool>,
}
