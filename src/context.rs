//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::HttpTaskGateway;
use crate::adapters::recording::RecordingTaskGateway;
use crate::adapters::replaying::ReplayingTaskGateway;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::ClientConfig;
use crate::ports::gateway::TaskGateway;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying). The gateway is shared so a controller and the
/// code driving it can hold it at the same time.
pub struct ServiceContext {
    /// Gateway to the remote task store.
    pub gateway: Arc<dyn TaskGateway>,
}

impl ServiceContext {
    /// Creates a live context talking to the configured task store.
    #[must_use]
    pub fn live(config: &ClientConfig) -> Self {
        Self { gateway: Arc::new(HttpTaskGateway::new(config.base_url.clone())) }
    }

    /// Creates a recording context backed by live adapters.
    ///
    /// Every gateway call is captured in a cassette below `root`. Drop the
    /// context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(config: &ClientConfig, root: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root, config.base_url.as_str())?;
        let live = HttpTaskGateway::new(config.base_url.clone());
        let gateway = RecordingTaskGateway::new(Box::new(live), Arc::clone(&session.gateway));
        Ok((Self { gateway: Arc::new(gateway) }, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_file(path)?;
        Ok(Self { gateway: Arc::new(ReplayingTaskGateway::new(Arc::new(Mutex::new(replayer)))) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            base_url: "http://localhost:3000/".into(),
            interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[tokio::test]
    async fn replaying_context_serves_cassette() {
        let dir = std::env::temp_dir().join("taskdeck_ctx_test_replay");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("gateway.cassette.yaml");

        write_cassette(
            &path,
            vec![Interaction {
                seq: 0,
                port: "gateway".into(),
                method: "search".into(),
                input: json!({"query": "zzz"}),
                output: json!({"Ok": []}),
            }],
        );

        let ctx = ServiceContext::replaying(&path).unwrap();
        let hits = ctx.gateway.search("zzz").await.unwrap();
        assert!(hits.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_is_an_error() {
        assert!(ServiceContext::replaying(Path::new("/nonexistent/cassette.yaml")).is_err());
    }

    #[tokio::test]
    async fn recording_context_writes_cassette_after_drop() {
        let root = std::env::temp_dir().join("taskdeck_ctx_test_record");
        let _ = std::fs::remove_dir_all(&root);
        let config = ClientConfig::resolve(Some("http://127.0.0.1:9"), None).unwrap();

        let (ctx, session) = ServiceContext::recording_at(&config, &root).unwrap();
        assert!(ctx.gateway.list().await.is_err());
        drop(ctx);

        let dir = session.finish().unwrap();
        let content = std::fs::read_to_string(dir.join("gateway.cassette.yaml")).unwrap();
        assert!(content.contains("method: list"));
        assert!(content.contains("Transport"));

        let _ = std::fs::remove_dir_all(&root);
    }
}
