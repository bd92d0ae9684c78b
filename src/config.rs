//! Client configuration resolution.

use reqwest::Url;

/// Task store location used when neither a flag nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable holding the task store base URL.
pub const BASE_URL_ENV: &str = "TASKDECK_BASE_URL";

/// Environment variable naming a directory to record gateway cassettes into.
pub const RECORD_ENV: &str = "TASKDECK_RECORD";

/// Resolved runtime configuration for one client invocation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote task store.
    pub base_url: Url,
    /// Tracing filter directive, e.g. `"debug"` or `"taskdeck=trace"`.
    pub log_filter: Option<String>,
}

impl ClientConfig {
    /// Builds a configuration from an optional base URL override.
    ///
    /// # Errors
    ///
    /// Returns an error string if the URL does not parse or is not http(s).
    pub fn resolve(base_url: Option<&str>, log_filter: Option<String>) -> Result<Self, String> {
        let raw = base_url.unwrap_or(DEFAULT_BASE_URL);
        let base_url =
            Url::parse(raw).map_err(|e| format!("Invalid task store URL {raw:?}: {e}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(format!("Task store URL must use http or https: {raw}"));
        }
        Ok(Self { base_url, log_filter })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: Url::parse(DEFAULT_BASE_URL).expect("default URL is valid"), log_filter: None }
    }
}
