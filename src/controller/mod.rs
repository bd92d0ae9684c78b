//! Task view controller.
//!
//! Owns the canonical task list and the search overlay, and keeps them
//! consistent with the remote store. Every intent calls the gateway first
//! and mutates local state only once the call has succeeded, so the list
//! never shows something the store has not confirmed.
//!
//! State sits behind a mutex that is never held across an `.await`. Several
//! intents may therefore be in flight at once; nothing serializes them, and
//! when two calls touch the same task the last response to arrive wins.

pub mod state;


use std::sync::{Arc, Mutex, MutexGuard};

pub use state::{SearchOverlay, TaskForm, View, ViewState};

use crate::error::ControllerError;
use crate::ports::gateway::TaskGateway;
use crate::task::{NewTask, Task, TaskPatch};

/// Shortest query that is sent to the store.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Default)]
struct Inner {
    state: ViewState,
    form: TaskForm,
    last_error: Option<String>,
}

/// Drives the task list through the gateway and reconciles local state.
pub struct TaskController {
    gateway: Arc<dyn TaskGateway>,
    inner: Mutex<Inner>,
}

impl TaskController {
    /// Creates a controller in the `Loading` state.
    #[must_use]
    pub fn new(gateway: Arc<dyn TaskGateway>) -> Self {
        Self { gateway, inner: Mutex::new(Inner::default()) }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("controller state lock poisoned")
    }

    /// Logs a failed intent and keeps it as the last error.
    fn fail(&self, action: &str, err: ControllerError) -> ControllerError {
        tracing::warn!(action, error = %err, "task intent failed; local state unchanged");
        self.lock().last_error = Some(err.to_string());
        err
    }

    fn ensure_ready(&self, action: &str) -> Result<(), ControllerError> {
        if self.lock().state.is_ready() {
            Ok(())
        } else {
            Err(self.fail(action, ControllerError::NotReady))
        }
    }

    /// Performs the initial listing.
    ///
    /// Runs from `Loading` or `LoadFailed`; once the list is loaded this is a
    /// no-op, since the canonical list is only refreshed by [`Self::reload`].
    ///
    /// # Errors
    ///
    /// Returns the gateway error after moving to `LoadFailed`.
    pub async fn load(&self) -> Result<(), ControllerError> {
        if self.lock().state.is_ready() {
            return Ok(());
        }
        self.fetch_all("load").await
    }

    /// Replaces the canonical list with a fresh listing and clears the overlay.
    ///
    /// # Errors
    ///
    /// Returns the gateway error. A loaded list is kept on failure.
    pub async fn reload(&self) -> Result<(), ControllerError> {
        self.fetch_all("reload").await
    }

    async fn fetch_all(&self, action: &str) -> Result<(), ControllerError> {
        match self.gateway.list().await {
            Ok(tasks) => {
                tracing::debug!(action, count = tasks.len(), "task list loaded");
                let mut inner = self.lock();
                inner.state = ViewState::ready(tasks);
                inner.last_error = None;
                Ok(())
            }
            Err(err) => {
                {
                    let mut inner = self.lock();
                    if !inner.state.is_ready() {
                        inner.state = ViewState::LoadFailed(err.to_string());
                    }
                }
                Err(self.fail(action, err.into()))
            }
        }
    }

    /// Creates a task and appends the store's record of it.
    ///
    /// `description` defaults to empty. The appended entry is the one the
    /// store returned, so its id and timestamp match the remote record.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTitle` for a blank title, `NotReady` before the list is
    /// loaded, or the gateway error. The list is unchanged on error.
    pub async fn add_task(&self, title: &str, description: Option<String>) -> Result<Task, ControllerError> {
        self.ensure_ready("create")?;
        if title.trim().is_empty() {
            return Err(self.fail("create", ControllerError::EmptyTitle));
        }

        let new_task = NewTask::new(title, description);
        match self.gateway.create(&new_task).await {
            Ok(task) => {
                tracing::debug!(task_id = %task.id, "task created");
                let mut inner = self.lock();
                inner.state.apply_created(task.clone());
                inner.last_error = None;
                Ok(task)
            }
            Err(err) => Err(self.fail("create", err.into())),
        }
    }

    /// Opens the creation form, keeping whatever it already holds.
    pub fn open_form(&self) {
        self.lock().form.open = true;
    }

    /// Closes the creation form without submitting it.
    pub fn close_form(&self) {
        self.lock().form.open = false;
    }

    /// Edits the creation form fields.
    pub fn edit_form(&self, edit: impl FnOnce(&mut TaskForm)) {
        edit(&mut self.lock().form);
    }

    /// Submits the creation form.
    ///
    /// On success the form is closed and cleared. On failure it stays open
    /// with its contents intact so the user can try again.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_task`].
    pub async fn submit_form(&self) -> Result<Task, ControllerError> {
        let (title, description) = {
            let inner = self.lock();
            (inner.form.title.clone(), inner.form.description.clone())
        };
        let task = self.add_task(&title, Some(description)).await?;
        self.lock().form = TaskForm::default();
        Ok(task)
    }

    /// Flips a task's completion flag once the store confirms it.
    ///
    /// The request carries the opposite of the task's current local value.
    /// Returns the confirmed value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTask` if the id is not in the canonical list, or the
    /// gateway error. The list is unchanged on error.
    pub async fn toggle(&self, id: &str) -> Result<bool, ControllerError> {
        self.ensure_ready("toggle")?;
        let current = self.lock().state.find(id).map(|task| task.completed);
        let Some(current) = current else {
            return Err(self.fail("toggle", ControllerError::UnknownTask(id.to_string())));
        };

        let requested = !current;
        match self.gateway.update(id, &TaskPatch::completed(requested)).await {
            Ok(_) => {
                let mut inner = self.lock();
                if !inner.state.apply_completed(id, requested) {
                    tracing::debug!(task_id = id, "toggled task no longer listed");
                }
                inner.last_error = None;
                tracing::debug!(task_id = id, completed = requested, "task toggled");
                Ok(requested)
            }
            Err(err) => Err(self.fail("toggle", err.into())),
        }
    }

    /// Removes a task once the store confirms the deletion.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTask` if the id is not in the canonical list, or the
    /// gateway error. The task stays listed on error.
    pub async fn delete(&self, id: &str) -> Result<(), ControllerError> {
        self.ensure_ready("delete")?;
        if self.lock().state.find(id).is_none() {
            return Err(self.fail("delete", ControllerError::UnknownTask(id.to_string())));
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                let mut inner = self.lock();
                inner.state.apply_deleted(id);
                inner.last_error = None;
                tracing::debug!(task_id = id, "task deleted");
                Ok(())
            }
            Err(err) => Err(self.fail("delete", err.into())),
        }
    }

    /// Applies a search query to the overlay.
    ///
    /// - empty query: overlay becomes `Inactive`, no remote call;
    /// - one character: nothing happens, no remote call;
    /// - longer: the store is searched and the overlay shows the result.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; the overlay keeps its previous state.
    pub async fn search(&self, query: &str) -> Result<(), ControllerError> {
        self.ensure_ready("search")?;
        if query.is_empty() {
            self.lock().state.set_overlay(SearchOverlay::Inactive);
            return Ok(());
        }
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(());
        }

        match self.gateway.search(query).await {
            Ok(hits) => {
                tracing::debug!(query, count = hits.len(), "search overlay updated");
                let mut inner = self.lock();
                inner.state.set_overlay(SearchOverlay::Active(hits));
                inner.last_error = None;
                Ok(())
            }
            Err(err) => Err(self.fail("search", err.into())),
        }
    }

    /// Drops the search overlay and shows the canonical list again.
    pub fn clear_search(&self) {
        self.lock().state.set_overlay(SearchOverlay::Inactive);
    }

    /// Snapshot of the whole state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    /// Snapshot of the canonical list; empty until loaded.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().state.tasks().map(<[Task]>::to_vec).unwrap_or_default()
    }

    /// Snapshot of the overlay; `None` until loaded.
    #[must_use]
    pub fn overlay(&self) -> Option<SearchOverlay> {
        self.lock().state.overlay().cloned()
    }

    /// What the view layer should render now.
    #[must_use]
    pub fn visible(&self) -> View {
        self.lock().state.view()
    }

    /// Snapshot of the creation form.
    #[must_use]
    pub fn form(&self) -> TaskForm {
        self.lock().form.clone()
    }

    /// Message of the most recent failed intent, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }
}
