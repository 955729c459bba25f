//! Transient view state for a task list UI.
//!
//! # Design
//! A rendering layer keeps exactly three things between paints: the last
//! fetched task list, whether a request is in flight, and an optional
//! user-facing error message. `TaskView` owns that state and applies the
//! refresh-after-mutation policy: mutations are never applied locally —
//! a successful create/update/delete tells the caller to re-fetch the whole
//! list. Failures are treated uniformly regardless of status code or error
//! kind: the detail is logged, the user sees a generic per-action message,
//! and the stale list stays on screen.

use crate::error::ApiError;
use crate::types::Task;

/// The user operation behind an in-flight request. Selects the message
/// shown when that request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
}

impl Action {
    fn failure_message(self) -> &'static str {
        match self {
            Action::Load => "Failed to load tasks. Please try again.",
            Action::Create => "Failed to create task. Please try again.",
            Action::Update => "Failed to update task. Please try again.",
            Action::Delete => "Failed to delete task. Please try again.",
        }
    }
}

/// Transient state of a task list view.
#[derive(Debug, Default)]
pub struct TaskView {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
}

impl TaskView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The task list as of the last successful refresh.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current user-facing error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a request as started.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Ingests the result of a list refresh. On success the task list is
    /// replaced wholesale and any previous error is cleared; on failure the
    /// previous list is kept and a generic message is shown.
    pub fn complete_refresh(&mut self, result: Result<Vec<Task>, ApiError>) {
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(err) => self.fail(Action::Load, &err),
        }
    }

    /// Ingests the result of a create/update/delete call. Returns `true`
    /// when the caller should follow up with a full refresh — the view
    /// never applies mutations to its local list.
    pub fn complete_mutation(&mut self, action: Action, result: Result<(), ApiError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                self.fail(action, &err);
                false
            }
        }
    }

    fn fail(&mut self, action: Action, err: &ApiError) {
        tracing::warn!("{action:?} request failed: {err}");
        self.error = Some(action.failure_message().to_string());
    }
}
