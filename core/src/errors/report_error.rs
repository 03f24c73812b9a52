// core/src/errors/report_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report serialization failed")]
    Serialize(#[from] serde_json::Error),

    #[error("report write failed: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
