//! Live adapter for the `TaskGateway` port speaking HTTP to the task store.

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::ports::gateway::{GatewayFuture, TaskGateway};
use crate::task::{NewTask, Task, TaskPatch};

/// Resource path of the task collection, relative to the base URL.
const TASK_RESOURCE: &str = "task";

/// Live gateway that calls the task store's REST API.
pub struct HttpTaskGateway {
    client: Client,
    base_url: Url,
}

impl HttpTaskGateway {
    /// Creates a gateway rooted at `base_url` (e.g. `http://localhost:3000`).
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self { client: Client::new(), base_url }
    }

    /// Builds `<base>/task/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GatewayError::Transport(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(TASK_RESOURCE)
            .extend(segments);
        Ok(url)
    }

    fn search_endpoint(&self, query: &str) -> Result<Url, GatewayError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }
}

/// Sends a request and returns the body of a successful response.
async fn execute(request: RequestBuilder, method: &'static str, url: &Url) -> Result<String, GatewayError> {
    tracing::debug!(method, path = url.path(), "task store request");

    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Transport(format!("{method} {} failed: {e}", url.path())))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::Transport(format!("failed to read task store response: {e}")))?;

    if !status.is_success() {
        tracing::debug!(method, path = url.path(), status = status.as_u16(), "task store rejected request");
        return Err(GatewayError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

impl TaskGateway for HttpTaskGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<Task>> {
        Box::pin(async move {
            let url = self.endpoint(&[])?;
            let body = execute(self.client.get(url.clone()), "GET", &url).await?;
            decode::<Vec<Task>>(&body)
        })
    }

    fn create(&self, task: &NewTask) -> GatewayFuture<'_, Task> {
        let url = self.endpoint(&[]);
        let task = task.clone();
        Box::pin(async move {
            let url = url?;
            let body = execute(self.client.post(url.clone()).json(&task), "POST", &url).await?;
            decode::<Task>(&body)
        })
    }

    fn update(&self, id: &str, patch: &TaskPatch) -> GatewayFuture<'_, Task> {
        let url = self.endpoint(&[id]);
        let patch = patch.clone();
        Box::pin(async move {
            let url = url?;
            let body = execute(self.client.patch(url.clone()).json(&patch), "PATCH", &url).await?;
            decode::<Task>(&body)
        })
    }

    fn delete(&self, id: &str) -> GatewayFuture<'_, ()> {
        let url = self.endpoint(&[id]);
        Box::pin(async move {
            let url = url?;
            // The store may or may not send a body; either way it is ignored.
            execute(self.client.delete(url.clone()), "DELETE", &url).await?;
            Ok::<(), GatewayError>(())
        })
    }

    fn search(&self, query: &str) -> GatewayFuture<'_, Vec<Task>> {
        let url = self.search_endpoint(query);
        Box::pin(async move {
            let url = url?;
            let body = execute(self.client.get(url.clone()), "GET", &url).await?;
            decode::<Vec<Task>>(&body)
        })
    }
}
