//! Recording adapter for the `TaskGateway` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::gateway::{GatewayFuture, TaskGateway};
use crate::task::{NewTask, Task, TaskPatch};

/// Port name used for gateway interactions in cassettes.
pub const PORT: &str = "gateway";

/// Records gateway interactions while delegating to an inner implementation.
pub struct RecordingTaskGateway {
    inner: Box<dyn TaskGateway>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTaskGateway {
    /// Creates a new recording gateway wrapping the given implementation.
    pub fn new(inner: Box<dyn TaskGateway>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct NoInput {}

#[derive(Serialize)]
struct UpdateInput {
    id: String,
    patch: TaskPatch,
}

#[derive(Serialize)]
struct IdInput {
    id: String,
}

#[derive(Serialize)]
struct SearchInput {
    query: String,
}

impl TaskGateway for RecordingTaskGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<Task>> {
        Box::pin(async move {
            let result = self.inner.list().await;
            record_result(&self.recorder, PORT, "list", &NoInput {}, &result);
            result
        })
    }

    fn create(&self, task: &NewTask) -> GatewayFuture<'_, Task> {
        let task = task.clone();
        Box::pin(async move {
            let result = self.inner.create(&task).await;
            record_result(&self.recorder, PORT, "create", &task, &result);
            result
        })
    }

    fn update(&self, id: &str, patch: &TaskPatch) -> GatewayFuture<'_, Task> {
        let input = UpdateInput { id: id.to_string(), patch: patch.clone() };
        Box::pin(async move {
            let result = self.inner.update(&input.id, &input.patch).await;
            record_result(&self.recorder, PORT, "update", &input, &result);
            result
        })
    }

    fn delete(&self, id: &str) -> GatewayFuture<'_, ()> {
        let input = IdInput { id: id.to_string() };
        Box::pin(async move {
            let result = self.inner.delete(&input.id).await;
            record_result(&self.recorder, PORT, "delete", &input, &result);
            result
        })
    }

    fn search(&self, query: &str) -> GatewayFuture<'_, Vec<Task>> {
        let input = SearchInput { query: query.to_string() };
        Box::pin(async move {
            let result = self.inner.search(&input.query).await;
            record_result(&self.recorder, PORT, "search", &input, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::gateway::HttpTaskGateway;
    use crate::cassette::format::Cassette;

    #[tokio::test]
    async fn records_failed_list_interaction() {
        let dir = std::env::temp_dir().join("taskdeck_rec_gateway_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("gateway.cassette.yaml");

        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "http://127.0.0.1:9/")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let live = HttpTaskGateway::new("http://127.0.0.1:9".parse().unwrap());
            let gateway = RecordingTaskGateway::new(Box::new(live), Arc::clone(&recorder));
            // Nothing listens on the discard port, but the failure is still recorded
            let _ = gateway.list().await;
            let _ = gateway.search("milk").await;
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].port, "gateway");
        assert_eq!(cassette.interactions[0].method, "list");
        assert!(cassette.interactions[0].output.get("Err").is_some());
        assert_eq!(cassette.interactions[1].input["query"], "milk");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
