//! Replaying adapters that replay recorded interactions.

pub mod gateway;

pub use gateway::ReplayingTaskGateway;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// Pull the next recorded output for `port::method`.
///
/// # Panics
///
/// Panics when the cassette has no interaction left for `port::method`.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    let interaction = guard.next_interaction(port, method);
    interaction.output
}

/// Decode an output recorded by `recording::record_result`.
///
/// # Panics
///
/// Panics when the output is neither `{"Ok": ..}` nor `{"Err": ..}`, or
/// when the payload does not match the expected type.
pub(crate) fn replay_result<T, E>(output: serde_json::Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    if let Some(ok) = output.get("Ok") {
        return Ok(serde_json::from_value(ok.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize recorded Ok value: {e}")));
    }
    if let Some(err) = output.get("Err") {
        return Err(serde_json::from_value(err.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize recorded Err value: {e}")));
    }
    panic!("recorded output is not an Ok/Err result: {output}");
}
