//! Recording session owning the cassette recorder for one invocation.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::adapters::recording::gateway::PORT;

/// Owns the gateway `CassetteRecorder` for a recording session.
///
/// Cassettes are stored in a timestamped directory below the requested root.
pub struct RecordingSession {
    /// Recorder for task gateway interactions.
    pub gateway: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing the cassette files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session below `root`.
    ///
    /// Creates directory `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new(root: &Path, base_url: &str) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let path = output_dir.join(format!("{PORT}.cassette.yaml"));
        let name = format!("{timestamp}-{PORT}");
        let gateway = Arc::new(Mutex::new(CassetteRecorder::new(path, name, base_url)));

        Ok(Self { gateway, output_dir })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish recording and write cassette files to disk.
    ///
    /// All adapters holding the recorder must have been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.gateway)
            .map_err(|_| format!("Recording adapter for {PORT} still has references"))?
            .into_inner()
            .map_err(|e| format!("Recorder lock for {PORT} poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write {PORT} cassette: {e}"))?;

        Ok(self.output_dir)
    }
}
