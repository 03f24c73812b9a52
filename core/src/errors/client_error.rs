// core/src/errors/client_error.rs
use thiserror::Error;

/// Failures inside the control-plane collaborator. Probes convert these into
/// Fail outcomes; the core never looks past the message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("control-plane request failed: {0}")]
    Transport(String),

    #[error("control-plane returned {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("control-plane response decode error: {0}")]
    Decode(String),
}
