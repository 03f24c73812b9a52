// core/src/errors/config_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required input: {0}")]
    Missing(String),

    #[error("config file parse error")]
    Parse(#[source] anyhow::Error),
}
