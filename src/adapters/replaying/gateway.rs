//! Replaying adapter for the `TaskGateway` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::adapters::recording::gateway::PORT;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::GatewayError;
use crate::ports::gateway::{GatewayFuture, TaskGateway};
use crate::task::{NewTask, Task, TaskPatch};

/// Serves recorded task store responses from a cassette.
///
/// Inputs are not checked; calls are answered in recorded order per method.
pub struct ReplayingTaskGateway {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingTaskGateway {
    /// Create a replaying gateway backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }

    fn next<T: serde::de::DeserializeOwned + Send + 'static>(
        &self,
        method: &str,
    ) -> GatewayFuture<'_, T> {
        let output = next_output(&self.replayer, PORT, method);
        Box::pin(async move { replay_result::<T, GatewayError>(output) })
    }
}

impl TaskGateway for ReplayingTaskGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<Task>> {
        self.next("list")
    }

    fn create(&self, _task: &NewTask) -> GatewayFuture<'_, Task> {
        self.next("create")
    }

    fn update(&self, _id: &str, _patch: &TaskPatch) -> GatewayFuture<'_, Task> {
        self.next("update")
    }

    fn delete(&self, _id: &str) -> GatewayFuture<'_, ()> {
        self.next("delete")
    }

    fn search(&self, _query: &str) -> GatewayFuture<'_, Vec<Task>> {
        self.next("search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> Arc<Mutex<CassetteReplayer>> {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            base_url: "http://localhost:3000/".into(),
            interactions,
        };
        Arc::new(Mutex::new(CassetteReplayer::new(&cassette)))
    }

    fn interaction(seq: u64, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: "gateway".into(), method: method.into(), input: json!({}), output }
    }

    #[tokio::test]
    async fn serves_recorded_listing() {
        let replayer = make_replayer(vec![interaction(
            0,
            "list",
            json!({"Ok": [{
                "id": "a", "title": "Buy milk", "description": "",
                "created_at": "2024-01-01T00:00:00Z", "completed": false
            }]}),
        )]);
        let gateway = ReplayingTaskGateway::new(replayer);

        let tasks = gateway.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn serves_recorded_failure() {
        let replayer = make_replayer(vec![interaction(
            0,
            "delete",
            json!({"Err": {"Status": {"status": 500, "body": "boom"}}}),
        )]);
        let gateway = ReplayingTaskGateway::new(replayer);

        let err = gateway.delete("a").await.unwrap_err();
        assert_eq!(err, GatewayError::Status { status: 500, body: "boom".into() });
    }

    #[tokio::test]
    async fn delete_replays_unit_ok() {
        let replayer = make_replayer(vec![interaction(0, "delete", json!({"Ok": null}))]);
        let gateway = ReplayingTaskGateway::new(replayer);
        assert!(gateway.delete("a").await.is_ok());
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn call_beyond_recording_panics() {
        let replayer = make_replayer(vec![interaction(0, "list", json!({"Ok": []}))]);
        let gateway = ReplayingTaskGateway::new(replayer);
        let _ = gateway.list();
        let _ = gateway.list();
    }
}
