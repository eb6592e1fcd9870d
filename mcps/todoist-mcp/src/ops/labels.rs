//! Label and filter operations

use super::{recover, Outcome};
use crate::colors::color_id;
use crate::todoist::TodoistApi;
use crate::types::{Filter, Label, NewLabel};

pub async fn get_labels(api: &dyn TodoistApi) -> Outcome<Vec<Label>> {
    api.list_labels()
        .await
        .map_err(|e| recover("get_labels", e))
}

/// Create a label; an unknown color name leaves the color unset
pub async fn create_label(
    api: &dyn TodoistApi,
    name: &str,
    color: Option<&str>,
    is_favorite: Option<bool>,
) -> Outcome<Label> {
    let label = NewLabel {
        name: name.to_string(),
        color: color.and_then(color_id),
        is_favorite,
    };

    api.add_label(&label)
        .await
        .map_err(|e| recover("create_label", e))
}

/// Saved filters
///
/// The REST API has no endpoint for listing filters, so this is always
/// empty. Filters can still be used as queries through `list_tasks`.
pub async fn get_filters(_api: &dyn TodoistApi) -> Outcome<Vec<Filter>> {
    Ok(Vec::new())
}
