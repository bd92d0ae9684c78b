//! Error types for gateway calls and controller intents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single remote call.
///
/// `Transport` covers anything that kept the request from completing.
/// `Status` and `Decode` are protocol failures: the store answered, but not
/// with something usable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GatewayError {
    /// The request could not be sent or the response could not be read.
    #[error("task store unreachable: {0}")]
    Transport(String),
    /// The store answered with a non-success status.
    #[error("task store returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// The response body was not the expected JSON.
    #[error("malformed task store response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Returns true for network-level failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Why a controller intent was rejected or failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The initial listing has not completed.
    #[error("task list is not loaded")]
    NotReady,
    /// A task cannot be created without a title.
    #[error("task title must not be empty")]
    EmptyTitle,
    /// No task with this id is in the canonical list.
    #[error("no task with id {0}")]
    UnknownTask(String),
    /// The remote call failed; local state was left unchanged.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_is_distinguished_from_protocol_errors() {
        assert!(GatewayError::Transport("refused".into()).is_transport());
        assert!(!GatewayError::Status { status: 500, body: String::new() }.is_transport());
        assert!(!GatewayError::Decode("eof".into()).is_transport());
    }

    #[test]
    fn controller_error_wraps_gateway_message() {
        let err = ControllerError::from(GatewayError::Status { status: 404, body: "gone".into() });
        assert_eq!(err.to_string(), "task store returned 404: gone");
    }
}
