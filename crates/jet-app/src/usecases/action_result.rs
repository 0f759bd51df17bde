use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::error;

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Uniform outcome returned by admin actions: `{"success": true}` or
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    Success { success: bool },
    Failure { error: String },
}

impl ActionResult {
    pub fn success() -> Self {
        ActionResult::Success { success: true }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ActionResult::Failure {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success { success: true })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ActionResult::Failure { error } => Some(error),
            ActionResult::Success { .. } => None,
        }
    }
}

/// Run an action body, turning its error and any panic into an
/// [`ActionResult`]. Nothing escapes the action boundary.
pub(crate) async fn run_action<F, E>(action: &'static str, body: F) -> ActionResult
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    match AssertUnwindSafe(body).catch_unwind().await {
        Ok(Ok(())) => ActionResult::success(),
        Ok(Err(err)) => ActionResult::failure(err.to_string()),
        Err(_panic) => {
            error!(action, "action panicked, returning generic error");
            ActionResult::failure(GENERIC_ERROR_MESSAGE)
        }
    }
}
