//! Entity operations
//!
//! One async function per remote action. Each takes the [`TodoistApi`] it
//! should talk to and returns an [`Outcome`]: any failure from the service is
//! turned into an [`OperationError`] at this boundary, so front ends can
//! render every error the same way.
//!
//! [`TodoistApi`]: crate::todoist::TodoistApi

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::todoist::ApiError;

mod labels;
mod projects;
mod tasks;

pub use labels::*;
pub use projects::*;
pub use tasks::*;

/// Uniform operation failure, serialized as `{"error": "<message>"}`
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{error}")]
pub struct OperationError {
    pub error: String,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Result of an entity operation
pub type Outcome<T> = Result<T, OperationError>;

/// Convert a service error, logging which operation it came from
fn recover(operation: &'static str, err: ApiError) -> OperationError {
    tracing::warn!(operation, error = %err, "todoist operation failed");
    OperationError::new(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_shape() {
        let err = OperationError::new("Task not found");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({ "error": "Task not found" })
        );
        assert_eq!(err.to_string(), "Task not found");
    }

    #[test]
    fn test_recover_keeps_service_message() {
        let err = recover("get_task", ApiError::status(404, "Task not found"));
        assert!(err.error.contains("Task not found"));
    }
}
