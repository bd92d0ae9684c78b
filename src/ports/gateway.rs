//! Task gateway port for the remote task store.

use std::future::Future;
use std::pin::Pin;

use crate::error::GatewayError;
use crate::task::{NewTask, Task, TaskPatch};

/// Boxed future type alias used by [`TaskGateway`] to keep the trait dyn-compatible.
pub type GatewayFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// Translates task intents into calls against the remote store.
///
/// Implementations hold no task state. Each method issues exactly one
/// request and never retries.
pub trait TaskGateway: Send + Sync {
    /// Fetches the whole task collection.
    fn list(&self) -> GatewayFuture<'_, Vec<Task>>;

    /// Creates a task and returns it as persisted, with its assigned id and timestamp.
    fn create(&self, task: &NewTask) -> GatewayFuture<'_, Task>;

    /// Applies a partial update and returns the updated task.
    fn update(&self, id: &str, patch: &TaskPatch) -> GatewayFuture<'_, Task>;

    /// Deletes a task. Only success or failure is reported.
    fn delete(&self, id: &str) -> GatewayFuture<'_, ()>;

    /// Returns the tasks the store considers a match for `query`.
    fn search(&self, query: &str) -> GatewayFuture<'_, Vec<Task>>;
}
