//! Tracing subscriber setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs a compact stderr subscriber.
///
/// An explicit `filter` (from `--log`) wins over `RUST_LOG`; with neither,
/// only warnings and errors are shown. Installing twice is a no-op.
///
/// # Errors
///
/// Returns an error string if `filter` is not a valid filter expression.
pub fn init(filter: Option<&str>) -> Result<(), String> {
    let env_filter = build_filter(filter)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

fn build_filter(filter: Option<&str>) -> Result<EnvFilter, String> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    match filter {
        Some(raw) => builder.parse(raw).map_err(|e| format!("Invalid log filter {raw:?}: {e}")),
        None => Ok(builder.from_env_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_level_and_is_idempotent() {
        assert!(init(Some("debug")).is_ok());
        assert!(init(None).is_ok());
    }

    #[test]
    fn explicit_filter_is_used_verbatim() {
        let filter = build_filter(Some("taskdeck=debug,reqwest=info")).unwrap();
        let shown = filter.to_string();
        assert!(shown.contains("taskdeck=debug"), "{shown}");
        assert!(shown.contains("reqwest=info"), "{shown}");
    }

    #[test]
    fn rejects_garbage_directive() {
        let err = init(Some("taskdeck=notalevel")).unwrap_err();
        assert!(err.contains("Invalid log filter"));
    }
}
